/// Implementation using top-down memoized recursion
pub mod memo;

/// Implementation using a bottom-up fill of the table
pub mod tabular;
