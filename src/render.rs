//! リストの中身を`[a b c ]`の形式の文字列にする
//!
//! どちらの関数もListIteratorだけを使うので、3種類のリストで同じ結果になる

use std::fmt::Display;

use crate::interface::list::List;
use crate::interface::list_iterator::ListIterator;

/// list_iterator()とnext()で先頭から順に並べる。O(n)
pub fn forward<'a, T, L>(list: &'a L) -> String
where
    L: List<T>,
    <L::ListIter<'a> as ListIterator>::Item: Display,
{
    let mut it = list.list_iterator();
    let mut out = String::from("[");
    while it.has_next() {
        let Ok(x) = it.next() else {
            break;
        };
        out.push_str(&x.to_string());
        out.push(' ');
    }
    out.push(']');
    out
}

/// list_iterator_at(size())とprevious()で末尾から逆順に並べる
///
/// SLListではprevious()が毎回先頭から探し直すのでO(n^2)、それ以外はO(n)
pub fn backward<'a, T, L>(list: &'a L) -> String
where
    L: List<T>,
    <L::ListIter<'a> as ListIterator>::Item: Display,
{
    let mut out = String::from("[");
    if let Ok(mut it) = list.list_iterator_at(list.size()) {
        while it.has_previous() {
            let Ok(x) = it.previous() else {
                break;
            };
            out.push_str(&x.to_string());
            out.push(' ');
        }
    }
    out.push(']');
    out
}
