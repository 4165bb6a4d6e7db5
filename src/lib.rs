//! 配列リスト・単方向連結リスト・双方向連結リストを
//! 共通の`List`インタフェースで扱うためのコンテナ集
//!
//! ```
//! use open_sequences::data_structure::dl_list::DLList;
//! use open_sequences::interface::list::List;
//! use open_sequences::interface::list_iterator::ListIterator;
//!
//! let mut list = DLList::new();
//! list.add("a");
//! list.add("b");
//! list.add("c");
//!
//! let mut it = list.list_iterator_at(list.size()).unwrap();
//! assert_eq!(it.previous().unwrap(), "c");
//! assert_eq!(it.previous().unwrap(), "b");
//! assert_eq!(it.previous().unwrap(), "a");
//! assert!(!it.has_previous());
//! ```

pub mod data_structure;
pub mod error;
pub mod ingest;
pub mod interface;
pub mod render;
