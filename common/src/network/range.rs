//! # IPv4 Range Model
//!
//! Continuous, inclusive runs of IPv4 addresses. The seed module uses them for the
//! fixed local supplement (`192.168.1.1-10`) and the fallback list (`192.168.1.1-25`).

use std::net::Ipv4Addr;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub const fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> usize {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        if start > end {
            0
        } else {
            (end - start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr: u32 = u32::from(addr);
        u32::from(self.start_addr) <= addr && addr <= u32::from(self.end_addr)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4range_iter() {
        let range = Ipv4Range::new(Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 3));

        let mut iter = range.iter();
        assert_eq!(iter.next(), Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(iter.next(), Some(Ipv4Addr::new(192, 168, 1, 2)));
        assert_eq!(iter.next(), Some(Ipv4Addr::new(192, 168, 1, 3)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_ipv4range_len_matches_iter() {
        let range = Ipv4Range::new(Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 25));
        assert_eq!(range.len(), 25);
        assert_eq!(range.iter().count(), 25);
    }

    #[test]
    fn test_ipv4range_empty_when_reversed() {
        let range = Ipv4Range::new(Ipv4Addr::new(10, 0, 0, 5), Ipv4Addr::new(10, 0, 0, 1));
        assert!(range.is_empty());
        assert_eq!(range.iter().next(), None);
    }

    #[test]
    fn test_ipv4range_contains() {
        let range = Ipv4Range::new(Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 10));
        assert!(range.contains(Ipv4Addr::new(192, 168, 1, 1)));
        assert!(range.contains(Ipv4Addr::new(192, 168, 1, 10)));
        assert!(!range.contains(Ipv4Addr::new(192, 168, 1, 11)));
        assert!(!range.contains(Ipv4Addr::new(192, 168, 2, 5)));
    }
}
