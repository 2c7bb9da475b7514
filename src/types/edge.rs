use crate::types::Capacity;

#[derive(Clone, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct Edge<F> {
    pub from: String,
    pub to: String,
    pub capacity: Capacity<F>,
}

pub fn eq_up_to_capacity<F>(e1: &Edge<F>, e2: &Edge<F>) -> bool {
    e1.from == e2.from && e1.to == e2.to
}
