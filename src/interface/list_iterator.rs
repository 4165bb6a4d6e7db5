use std::fmt;

use crate::error::{ListError, Result};

/// リストイテレータに対する操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Next,
    Previous,
    NextIndex,
    PreviousIndex,
    Set,
    Add,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Next,
        Operation::Previous,
        Operation::NextIndex,
        Operation::PreviousIndex,
        Operation::Set,
        Operation::Add,
        Operation::Remove,
    ];

    /// 読み取り専用の走査で使える操作かどうか
    pub fn is_traversal(self) -> bool {
        matches!(self, Operation::Next | Operation::Previous)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Next => "next",
            Operation::Previous => "previous",
            Operation::NextIndex => "next_index",
            Operation::PreviousIndex => "previous_index",
            Operation::Set => "set",
            Operation::Add => "add",
            Operation::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// 双方向に走査できるカーソル
///
/// カーソルは要素と要素の間を指す。
/// next()はカーソルの直後の要素を返してカーソルを後ろへ、
/// previous()はカーソルの直前の要素を返してカーソルを前へ動かす
///
/// 走査以外の操作(set, add, remove, next_index, previous_index)は
/// 実装しない。どの位置で呼んでも`ListError::Unsupported`を返す
pub trait ListIterator {
    type Item;

    /// next()で返す要素があるか
    fn has_next(&self) -> bool;

    /// カーソルの直後の要素を返し、カーソルを一つ進める
    fn next(&mut self) -> Result<Self::Item>;

    /// previous()で返す要素があるか
    fn has_previous(&self) -> bool;

    /// カーソルの直前の要素を返し、カーソルを一つ戻す
    fn previous(&mut self) -> Result<Self::Item>;

    fn supports(&self, op: Operation) -> bool {
        op.is_traversal()
    }

    fn next_index(&self) -> Result<usize> {
        Err(ListError::Unsupported(Operation::NextIndex))
    }

    fn previous_index(&self) -> Result<usize> {
        Err(ListError::Unsupported(Operation::PreviousIndex))
    }

    fn set(&mut self, _x: Self::Item) -> Result<()> {
        Err(ListError::Unsupported(Operation::Set))
    }

    fn add(&mut self, _x: Self::Item) -> Result<()> {
        Err(ListError::Unsupported(Operation::Add))
    }

    fn remove(&mut self) -> Result<()> {
        Err(ListError::Unsupported(Operation::Remove))
    }
}
