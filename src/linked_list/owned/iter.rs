use super::traits::Link;

/// An iterator over the values of a linked chain, front to back.
pub struct Iter<'a, N> {
    current: Option<&'a N>,
}

impl<'a, N: Link> Iter<'a, N> {
    pub(super) fn new(head: Option<&'a N>) -> Self {
        Self { current: head }
    }
}

impl<'a, N: Link> Iterator for Iter<'a, N> {
    type Item = &'a N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next();
            node.data()
        })
    }
}
