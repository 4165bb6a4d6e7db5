use std::borrow::Borrow;

use crate::error::Result;
use crate::interface::list_iterator::ListIterator;

/// 値の列x(0)..x(n-1)とその列に対する操作からなる
///
/// ArrayList, SLList, DLListが共通して満たすインタフェース
pub trait List<T> {
    /// 先頭から末尾へ一方向に走査するイテレータ
    type Iter<'a>: Iterator<Item: Borrow<T>>
    where
        Self: 'a;

    /// 双方向に走査できるカーソル
    type ListIter<'a>: ListIterator
    where
        Self: 'a;

    /// xを末尾に追加する。容量は自動で増えるので常にtrue
    fn add(&mut self, x: T) -> bool;

    /// リストの長さnを返す
    fn size(&self) -> usize;

    fn iter(&self) -> Self::Iter<'_>;

    /// 先頭の要素の前にカーソルを置いたListIteratorを返す
    fn list_iterator(&self) -> Self::ListIter<'_>;

    /// index > nのときは`ListError::IndexOutOfBounds`
    ///
    /// indexは範囲の検査にだけ使い、カーソルは常に末尾の要素の後ろに置く。
    /// previous()で末尾から逆順に辿るためのもの
    fn list_iterator_at(&self, index: usize) -> Result<Self::ListIter<'_>>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// xと等しい要素を含むか。O(n)
    fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|y| y.borrow() == x)
    }
}
