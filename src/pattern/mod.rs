//! DFS codes and the operations pattern growth needs on them.

pub use dfs_code::{DfsCode, Edge};
pub use extension::{embeddings, Embedding, RightmostExtender};

mod canonical;
mod dfs_code;
mod extension;

pub use canonical::is_min;
