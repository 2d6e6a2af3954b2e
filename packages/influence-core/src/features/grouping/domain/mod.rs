//! Domain models for component grouping

/// One weakly-connected component: node ids in merge order
///
/// The first member is the smallest id of the component; later members follow
/// in the order their groups were folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    members: Vec<usize>,
}

impl Group {
    pub fn singleton(id: usize) -> Self {
        Self { members: vec![id] }
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Groups of one member produce no output
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    /// Append all of `other`'s members after this group's members
    pub fn absorb(&mut self, other: Group) {
        self.members.extend(other.members);
    }
}

impl From<Vec<usize>> for Group {
    fn from(members: Vec<usize>) -> Self {
        Self { members }
    }
}
