use std::collections::HashSet;
use std::net::Ipv4Addr;

/// An ordered list of addresses to probe, free of duplicates.
///
/// Only the first occurrence of an address is kept, so the position of an
/// address in the list is the position at which it was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    addrs: Vec<Ipv4Addr>,
    seed: Option<String>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the seed this list was derived from.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Appends `addr` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, addr: Ipv4Addr) -> bool {
        if self.addrs.contains(&addr) {
            return false;
        }
        self.addrs.push(addr);
        true
    }

    pub fn first(&self) -> Option<Ipv4Addr> {
        self.addrs.first().copied()
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ipv4Addr> {
        self.addrs.iter()
    }

    pub fn as_slice(&self) -> &[Ipv4Addr] {
        &self.addrs
    }

    /// Leading subset of the list, e.g. to scan only part of a derivation.
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            addrs: self.addrs.iter().take(len).copied().collect(),
            seed: self.seed.clone(),
        }
    }
}

impl FromIterator<Ipv4Addr> for CandidateList {
    fn from_iter<T: IntoIterator<Item = Ipv4Addr>>(iter: T) -> Self {
        let mut seen: HashSet<Ipv4Addr> = HashSet::new();
        let addrs = iter.into_iter().filter(|addr| seen.insert(*addr)).collect();
        Self { addrs, seed: None }
    }
}

impl IntoIterator for CandidateList {
    type Item = Ipv4Addr;
    type IntoIter = std::vec::IntoIter<Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Ipv4Addr;
    type IntoIter = std::slice::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_keeps_first_occurrence_order() {
        let a = Ipv4Addr::new(192, 168, 7, 7);
        let b = Ipv4Addr::new(192, 168, 1, 1);
        let list: CandidateList = [a, b, a, b, a].into_iter().collect();
        assert_eq!(list.as_slice(), &[a, b]);
    }

    #[test]
    fn push_rejects_duplicates() {
        let mut list = CandidateList::new();
        assert!(list.push(Ipv4Addr::new(192, 168, 1, 1)));
        assert!(!list.push(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn truncated_keeps_prefix() {
        let list: CandidateList = (1..=5).map(|d| Ipv4Addr::new(192, 168, 1, d)).collect();
        let head = list.truncated(2);
        assert_eq!(head.as_slice(), &[Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 2)]);
        assert_eq!(list.truncated(50), list);
    }

    #[test]
    fn truncated_keeps_seed() {
        let list: CandidateList = [Ipv4Addr::new(192, 168, 1, 1)].into_iter().collect();
        let list = list.with_seed("nexus-1000");
        assert_eq!(list.truncated(0).seed(), Some("nexus-1000"));
    }
}
