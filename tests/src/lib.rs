//! End-to-end checks of the scan engine, driven through the public API only.

#[cfg(test)]
mod scan;
