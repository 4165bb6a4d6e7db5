use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use crate::error::{ListError, Result};
use crate::interface::list::List;
use crate::interface::list_iterator::ListIterator;

type StrongLink<T> = Rc<RefCell<Node<T>>>;
type WeakLink<T> = Weak<RefCell<Node<T>>>;

/// nextが次のノードを所有し、prevは前のノードを参照するだけ
#[derive(Debug)]
pub struct Node<T> {
    x: T,
    next: Option<StrongLink<T>>,
    prev: Option<WeakLink<T>>,
}

impl<T> Node<T> {
    fn new(x: T) -> Self {
        Self {
            x,
            next: None,
            prev: None,
        }
    }

    fn new_link(x: T) -> StrongLink<T> {
        Rc::new(RefCell::new(Self::new(x)))
    }
}

fn value_of<T: Clone>(link: &StrongLink<T>) -> T {
    link.borrow().x.clone()
}

fn into_value<T: Clone>(link: StrongLink<T>) -> T {
    match Rc::try_unwrap(link) {
        Ok(cell) => cell.into_inner().x,
        Err(rc) => value_of(&rc),
    }
}

fn prev_of<T>(link: &StrongLink<T>) -> Option<StrongLink<T>> {
    link.borrow().prev.as_ref().and_then(Weak::upgrade)
}

fn next_of<T>(link: &StrongLink<T>) -> Option<StrongLink<T>> {
    link.borrow().next.clone()
}

/// 双方向連結リスト
///
/// 各ノードが前後のノードへのリンクを持つので、
/// 両端への追加・削除とListIteratorのprevious()はO(1)
/// get(i), set(i,x), add_at(i,x), remove(i)は近い方の端から辿るのでO(1 + min(i, n - i))
///
/// - headがNoneであることとn == 0は同値
/// - head.prevとtail.nextは常にNone
/// - a.next == bとb.prev == aは同値
pub struct DLList<T> {
    head: Option<StrongLink<T>>,
    tail: Option<StrongLink<T>>,
    n: usize,
}

impl<T> DLList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            n: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 先頭にxを追加する。O(1)
    pub fn add_first(&mut self, x: T) -> bool {
        let u = Node::new_link(x);
        if let Some(head) = self.head.take() {
            head.borrow_mut().prev = Some(Rc::downgrade(&u));
            u.borrow_mut().next = Some(head);
        } else {
            self.tail = Some(Rc::clone(&u));
        }
        self.head = Some(u);
        self.n += 1;
        true
    }

    /// 末尾にxを追加する。O(1)
    pub fn add_last(&mut self, x: T) -> bool {
        let u = Node::new_link(x);
        if let Some(tail) = self.tail.take() {
            u.borrow_mut().prev = Some(Rc::downgrade(&tail));
            tail.borrow_mut().next = Some(Rc::clone(&u));
        } else {
            self.head = Some(Rc::clone(&u));
        }
        self.tail = Some(u);
        self.n += 1;
        true
    }

    /// 全てのノードを捨てる
    pub fn clear(&mut self) {
        self.tail = None;
        let mut p = self.head.take();
        while let Some(rc) = p {
            p = rc.borrow_mut().next.take();
        }
        self.n = 0;
    }

    fn out_of_bounds(&self, i: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index: i,
            size: self.n,
        }
    }

    /// i番目のノードを近い方の端から探す
    fn get_link(&self, i: usize) -> Option<StrongLink<T>> {
        let mut p: Option<StrongLink<T>>;
        if i < self.n / 2 {
            p = self.head.clone();
            for _ in 0..i {
                let next = match &p {
                    Some(rc) => next_of(rc),
                    None => break,
                };
                p = next;
            }
        } else {
            p = self.tail.clone();
            for _ in (i + 1..self.n).rev() {
                let prev = match &p {
                    Some(rc) => prev_of(rc),
                    None => break,
                };
                p = prev;
            }
        }
        p
    }

    /// wの前にxを持つノードを挿入する。wは先頭以外のノード
    fn add_before(&mut self, w: &StrongLink<T>, x: T) {
        let u = Node::new_link(x);
        let prev = prev_of(w);
        u.borrow_mut().prev = prev.as_ref().map(Rc::downgrade);
        u.borrow_mut().next = Some(Rc::clone(w));
        w.borrow_mut().prev = Some(Rc::downgrade(&u));
        if let Some(p) = prev {
            p.borrow_mut().next = Some(u);
        }
        self.n += 1;
    }

    /// x(i)の値をxにして、以前の値を返す
    pub fn set(&mut self, i: usize, x: T) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_bounds(i));
        }
        let u = self.get_link(i).ok_or_else(|| self.out_of_bounds(i))?;
        let y = std::mem::replace(&mut u.borrow_mut().x, x);
        Ok(y)
    }

    /// xをi番目として追加する
    pub fn add_at(&mut self, i: usize, x: T) -> Result<()> {
        if i > self.n {
            return Err(self.out_of_bounds(i));
        }
        if i == 0 {
            self.add_first(x);
        } else if i == self.n {
            self.add_last(x);
        } else {
            let w = self.get_link(i).ok_or_else(|| self.out_of_bounds(i))?;
            self.add_before(&w, x);
        }
        Ok(())
    }
}

impl<T: Clone> DLList<T> {
    /// 先頭の値。空なら`ListError::Empty`
    pub fn get_first(&self) -> Result<T> {
        self.head.as_ref().map(value_of).ok_or(ListError::Empty)
    }

    /// 末尾の値。空なら`ListError::Empty`
    pub fn get_last(&self) -> Result<T> {
        self.tail.as_ref().map(value_of).ok_or(ListError::Empty)
    }

    /// 先頭のノードを削除し、その値を返す。O(1)
    pub fn remove_first(&mut self) -> Result<T> {
        let target = self.head.take().ok_or(ListError::Empty)?;
        self.head = target.borrow_mut().next.take();
        // 新しいheadがあるときだけprevを外す。空になったらtailも外す
        match &self.head {
            Some(head) => head.borrow_mut().prev = None,
            None => self.tail = None,
        }
        self.n -= 1;
        Ok(into_value(target))
    }

    /// 末尾のノードを削除し、その値を返す。O(1)
    pub fn remove_last(&mut self) -> Result<T> {
        if self.n == 0 {
            return Err(ListError::Empty);
        }
        if self.n == 1 {
            return self.remove_first();
        }
        let target = self.tail.take().ok_or(ListError::Empty)?;
        let prev = target.borrow_mut().prev.take();
        let prev = prev.as_ref().and_then(Weak::upgrade).ok_or(ListError::Empty)?;
        prev.borrow_mut().next = None;
        self.tail = Some(prev);
        self.n -= 1;
        Ok(into_value(target))
    }

    /// x(i)の値を返す
    pub fn get(&self, i: usize) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_bounds(i));
        }
        self.get_link(i)
            .map(|u| value_of(&u))
            .ok_or_else(|| self.out_of_bounds(i))
    }

    /// x(i)を削除し、その値を返す
    pub fn remove(&mut self, i: usize) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_bounds(i));
        }
        if i == 0 {
            return self.remove_first();
        }
        if i == self.n - 1 {
            return self.remove_last();
        }
        let w = self.get_link(i).ok_or_else(|| self.out_of_bounds(i))?;
        Ok(self.remove_node(w))
    }

    // 両端以外のノードwを外す
    fn remove_node(&mut self, w: StrongLink<T>) -> T {
        let prev = w.borrow_mut().prev.take();
        let next = w.borrow_mut().next.take();
        if let Some(u) = &next {
            u.borrow_mut().prev = prev.clone();
        }
        if let Some(u) = prev.as_ref().and_then(Weak::upgrade) {
            u.borrow_mut().next = next;
        }
        self.n -= 1;
        into_value(w)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> Default for DLList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DLList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> List<T> for DLList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;
    type ListIter<'a>
        = ListIter<'a, T>
    where
        Self: 'a;

    fn add(&mut self, x: T) -> bool {
        self.add_last(x)
    }

    fn size(&self) -> usize {
        self.n
    }

    fn iter(&self) -> Iter<'_, T> {
        DLList::iter(self)
    }

    fn list_iterator(&self) -> ListIter<'_, T> {
        ListIter {
            tail: self.tail.clone(),
            current: self.head.clone(),
            marker: PhantomData,
        }
    }

    fn list_iterator_at(&self, index: usize) -> Result<ListIter<'_, T>> {
        if index > self.n {
            return Err(self.out_of_bounds(index));
        }
        Ok(ListIter {
            tail: self.tail.clone(),
            current: None,
            marker: PhantomData,
        })
    }
}

/// 先頭から順に値を返すイテレータ
pub struct Iter<'a, T> {
    current: Option<StrongLink<T>>,
    marker: PhantomData<&'a DLList<T>>,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let u = self.current.take()?;
        self.current = next_of(&u);
        Some(value_of(&u))
    }
}

/// DLListのListIterator
///
/// currentはnext()で返すノード。Noneなら末尾の後ろ
/// previous()はprevを一つ辿るだけなのでO(1)
pub struct ListIter<'a, T> {
    tail: Option<StrongLink<T>>,
    current: Option<StrongLink<T>>,
    marker: PhantomData<&'a DLList<T>>,
}

impl<T> ListIter<'_, T> {
    fn previous_link(&self) -> Option<StrongLink<T>> {
        match &self.current {
            Some(u) => prev_of(u),
            None => self.tail.clone(),
        }
    }
}

impl<T: Clone> ListIterator for ListIter<'_, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.current.is_some()
    }

    fn next(&mut self) -> Result<T> {
        let u = self.current.take().ok_or(ListError::Exhausted)?;
        self.current = next_of(&u);
        Ok(value_of(&u))
    }

    fn has_previous(&self) -> bool {
        match &self.current {
            Some(u) => u.borrow().prev.is_some(),
            None => self.tail.is_some(),
        }
    }

    fn previous(&mut self) -> Result<T> {
        let u = self.previous_link().ok_or(ListError::Exhausted)?;
        let x = value_of(&u);
        self.current = Some(u);
        Ok(x)
    }
}

impl<T> FromIterator<T> for DLList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DLList::new();
        for x in iter {
            list.add_last(x);
        }
        list
    }
}

impl<T: Clone> Clone for DLList<T> {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for DLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// [a b c ]の形式で表示する
impl<T: Clone + fmt::Display> fmt::Display for DLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for x in self.iter() {
            write!(f, "{x} ")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    /// リンクの対称性とhead/tail/nの整合性を確かめる
    fn assert_links<T>(list: &DLList<T>) {
        assert_eq!(list.head.is_none(), list.n == 0);
        assert_eq!(list.tail.is_none(), list.n == 0);
        if let Some(head) = &list.head {
            assert!(head.borrow().prev.is_none());
        }
        let mut count = 0;
        let mut p = list.head.clone();
        let mut last = None;
        while let Some(u) = p {
            count += 1;
            let next = next_of(&u);
            if let Some(v) = &next {
                let back = prev_of(v).expect("next node must link back");
                assert!(Rc::ptr_eq(&back, &u));
            }
            p = next;
            last = Some(u);
        }
        assert_eq!(count, list.n);
        match (&last, &list.tail) {
            (Some(u), Some(t)) => assert!(Rc::ptr_eq(u, t)),
            (None, None) => {}
            _ => panic!("tail does not match the last node"),
        }
    }

    fn values<T: Clone>(list: &DLList<T>) -> Vec<T> {
        list.iter().collect()
    }

    #[test]
    fn test_clone_list() {
        let mut list = DLList::new();
        list.add_at(0, 'a').unwrap();
        list.add_at(1, 'b').unwrap();
        list.add_at(2, 'c').unwrap();
        list.add_at(3, 'd').unwrap();
        list.add_at(4, 'e').unwrap();
        assert_eq!(list.size(), 5);
        assert_eq!(list.get(0), Ok('a'));
        assert_eq!(list.get(1), Ok('b'));
        assert_eq!(list.get(2), Ok('c'));
        assert_eq!(list.get(3), Ok('d'));
        assert_eq!(list.get(4), Ok('e'));
        assert_links(&list);

        assert_eq!(list.remove(3), Ok('d'));
        assert_eq!(list.size(), 4);
        assert_eq!(list.get(0), Ok('a'));
        assert_eq!(list.get(1), Ok('b'));
        assert_eq!(list.get(2), Ok('c'));
        assert_eq!(list.get(3), Ok('e'));
        assert_links(&list);

        list.add_at(1, 'x').unwrap();
        list.add_at(3, 'y').unwrap();
        assert_eq!(values(&list), vec!['a', 'x', 'b', 'y', 'c', 'e']);
        assert_links(&list);

        assert_eq!(list.set(4, 'z'), Ok('c'));
        assert_eq!(list.get(4), Ok('z'));
        assert_eq!(list.remove(1), Ok('x'));
        assert_eq!(values(&list), vec!['a', 'b', 'y', 'z', 'e']);
        assert_links(&list);
    }

    #[test]
    fn test_add_remove_ends() {
        let mut list = DLList::new();
        list.add_last(2);
        list.add_first(1);
        list.add_last(3);
        assert_links(&list);
        assert_eq!(list.get_first(), Ok(1));
        assert_eq!(list.get_last(), Ok(3));

        assert_eq!(list.remove_last(), Ok(3));
        assert_links(&list);
        assert_eq!(list.remove_first(), Ok(1));
        assert_links(&list);
        assert_eq!(list.remove_first(), Ok(2));
        assert_links(&list);
        assert_eq!(list.remove_first(), Err(ListError::Empty));
        assert_eq!(list.remove_last(), Err(ListError::Empty));
    }

    #[test]
    fn test_remove_last_single() {
        let mut list = DLList::new();
        list.add("only");
        assert_eq!(list.remove_last(), Ok("only"));
        assert_eq!(list.size(), 0);
        assert_eq!(list.get_first(), Err(ListError::Empty));
        assert_links(&list);
    }

    #[test]
    fn test_list_iterator() {
        let list: DLList<&str> = ["a", "b", "c"].into_iter().collect();

        let mut it = list.list_iterator_at(list.size()).unwrap();
        assert_eq!(it.previous(), Ok("c"));
        assert_eq!(it.previous(), Ok("b"));
        assert_eq!(it.previous(), Ok("a"));
        assert!(!it.has_previous());
        assert_eq!(it.previous(), Err(ListError::Exhausted));

        // 向きを変えると直前に返した要素をもう一度返す
        assert_eq!(it.next(), Ok("a"));
        assert_eq!(it.next(), Ok("b"));
        assert_eq!(it.previous(), Ok("b"));
    }

    #[test]
    fn test_forward_then_backward() {
        for n in [0, 1, 5] {
            let list: DLList<usize> = (0..n).collect();
            let mut forward = vec![];
            let mut it = list.list_iterator();
            while it.has_next() {
                forward.push(it.next().unwrap());
            }
            let mut backward = vec![];
            let mut it = list.list_iterator_at(list.size()).unwrap();
            while it.has_previous() {
                backward.push(it.previous().unwrap());
            }
            backward.reverse();
            assert_eq!(forward, backward);
            assert_eq!(forward, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_display() {
        let list: DLList<i32> = (1..=3).collect();
        assert_eq!(list.to_string(), "[1 2 3 ]");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(DLList::<i32>::new().to_string(), "[]");
    }

    #[test]
    fn test_clear_long_list() {
        let mut list: DLList<u32> = (0..200_000).collect();
        list.clear();
        assert_links(&list);
        list.add(7);
        assert_eq!(values(&list), vec![7]);
    }
}
