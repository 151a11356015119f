/// Dense bit mask of visited cells
pub mod mask;
/// Breadth-first connectivity search and its result
pub mod search;
/// Tolerance bands and admission policies
pub mod tolerance;
