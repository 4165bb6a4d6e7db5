use std::fmt;
use std::marker::PhantomData;
use std::{cell::RefCell, rc::Rc};

use crate::error::{ListError, Result};
use crate::interface::list::List;
use crate::interface::list_iterator::ListIterator;

type Link<T> = Rc<RefCell<Node<T>>>;

pub struct Node<T> {
    x: T,
    next: Option<Link<T>>,
}

impl<T> Node<T> {
    fn new(x: T) -> Self {
        Self { x, next: None }
    }

    fn new_link(x: T) -> Link<T> {
        Rc::new(RefCell::new(Self::new(x)))
    }
}

fn value_of<T: Clone>(link: &Link<T>) -> T {
    link.borrow().x.clone()
}

// リストから外したノードの値を取り出す
fn into_value<T: Clone>(link: Link<T>) -> T {
    match Rc::try_unwrap(link) {
        Ok(cell) => cell.into_inner().x,
        Err(rc) => value_of(&rc),
    }
}

/// Singly-Linked List(単方向連結リスト)
///
/// add_first(x), add_last(x), remove_first()の実行時間はいずれもO(1)
///
/// 末尾を削除する場合、末尾の一つ前のノードを探す必要があるが
/// これには、各ノードをheadから順にn-2回辿る必要がある。
/// そのためremove_last()とListIteratorのprevious()はO(n)
///
/// ノードは一つ前のノードのnext(先頭はhead)が所有する。tailは末尾への参照
pub struct SLList<T> {
    head: Option<Link<T>>,
    tail: Option<Link<T>>,
    n: usize,
}

impl<T> SLList<T> {
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
        let node = Node::new_link(x);
        node.borrow_mut().next = self.head.take();
        if self.n == 0 {
            self.tail = Some(Rc::clone(&node));
        }
        self.head = Some(node);
        self.n += 1;
        true
    }

    /// 末尾にxを追加する。O(1)
    pub fn add_last(&mut self, x: T) -> bool {
        let node = Node::new_link(x);
        if let Some(tail) = self.tail.take() {
            tail.borrow_mut().next = Some(Rc::clone(&node));
        } else {
            self.head = Some(Rc::clone(&node));
        }
        self.tail = Some(node);
        self.n += 1;
        true
    }

    /// 全てのノードを捨てる
    ///
    /// ノードを一つずつ切り離すので、長いリストでも再帰的なdropにならない
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

    // headからi回辿ったノード
    fn get_link(&self, i: usize) -> Option<Link<T>> {
        let mut p = self.head.clone();
        for _ in 0..i {
            let next = match &p {
                Some(rc) => rc.borrow().next.clone(),
                None => break,
            };
            p = next;
        }
        p
    }

    /// x(i)の値をxにして、以前の値を返す。O(1 + i)
    pub fn set(&mut self, i: usize, x: T) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_bounds(i));
        }
        let u = self.get_link(i).ok_or_else(|| self.out_of_bounds(i))?;
        let y = std::mem::replace(&mut u.borrow_mut().x, x);
        Ok(y)
    }

    /// xをi番目として追加する。O(1 + i)
    pub fn add_at(&mut self, i: usize, x: T) -> Result<()> {
        if i > self.n {
            return Err(self.out_of_bounds(i));
        }
        if i == 0 {
            self.add_first(x);
        } else if i == self.n {
            self.add_last(x);
        } else {
            let w = self.get_link(i - 1).ok_or_else(|| self.out_of_bounds(i))?;
            let u = Node::new_link(x);
            u.borrow_mut().next = w.borrow_mut().next.take();
            w.borrow_mut().next = Some(u);
            self.n += 1;
        }
        Ok(())
    }
}

impl<T: Clone> SLList<T> {
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
        // 空になったらtailも外す
        if self.head.is_none() {
            self.tail = None;
        }
        self.n -= 1;
        Ok(into_value(target))
    }

    /// 末尾のノードを削除し、その値を返す。O(n)
    pub fn remove_last(&mut self) -> Result<T> {
        if self.n == 0 {
            return Err(ListError::Empty);
        }
        if self.n == 1 {
            return self.remove_first();
        }
        let w = self.get_link(self.n - 2).ok_or(ListError::Empty)?;
        let target = w.borrow_mut().next.take().ok_or(ListError::Empty)?;
        self.tail = Some(w);
        self.n -= 1;
        Ok(into_value(target))
    }

    /// x(i)の値を返す。O(1 + i)
    pub fn get(&self, i: usize) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_bounds(i));
        }
        self.get_link(i)
            .map(|u| value_of(&u))
            .ok_or_else(|| self.out_of_bounds(i))
    }

    /// x(i)を削除し、その値を返す。O(1 + i)
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
        let w = self.get_link(i - 1).ok_or_else(|| self.out_of_bounds(i))?;
        let target = w
            .borrow_mut()
            .next
            .take()
            .ok_or_else(|| self.out_of_bounds(i))?;
        let next = target.borrow_mut().next.take();
        w.borrow_mut().next = next;
        self.n -= 1;
        Ok(into_value(target))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> Default for SLList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SLList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> List<T> for SLList<T> {
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
        SLList::iter(self)
    }

    fn list_iterator(&self) -> ListIter<'_, T> {
        ListIter {
            head: self.head.clone(),
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
            head: self.head.clone(),
            tail: self.tail.clone(),
            current: None,
            marker: PhantomData,
        })
    }
}

/// 先頭から順に値を返すイテレータ
pub struct Iter<'a, T> {
    current: Option<Link<T>>,
    marker: PhantomData<&'a SLList<T>>,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let u = self.current.take()?;
        self.current = u.borrow().next.clone();
        Some(value_of(&u))
    }
}

/// SLListのListIterator
///
/// currentはnext()で返すノード。Noneなら末尾の後ろ
/// 前のノードへのリンクが無いので、previous()は毎回headから探し直す
pub struct ListIter<'a, T> {
    head: Option<Link<T>>,
    tail: Option<Link<T>>,
    current: Option<Link<T>>,
    marker: PhantomData<&'a SLList<T>>,
}

impl<T> ListIter<'_, T> {
    // currentの一つ前のノードをheadから探す。O(n)
    fn find_previous(&self) -> Option<Link<T>> {
        let Some(current) = &self.current else {
            return self.tail.clone();
        };
        let mut p = self.head.clone()?;
        loop {
            let next = p.borrow().next.clone();
            match next {
                Some(u) if Rc::ptr_eq(&u, current) => return Some(p),
                Some(u) => p = u,
                None => return None,
            }
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
        self.current = u.borrow().next.clone();
        Ok(value_of(&u))
    }

    fn has_previous(&self) -> bool {
        match (&self.current, &self.head) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(current), Some(head)) => !Rc::ptr_eq(current, head),
        }
    }

    fn previous(&mut self) -> Result<T> {
        if !self.has_previous() {
            return Err(ListError::Exhausted);
        }
        let u = self.find_previous().ok_or(ListError::Exhausted)?;
        let x = value_of(&u);
        self.current = Some(u);
        Ok(x)
    }
}

impl<T> FromIterator<T> for SLList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SLList::new();
        for x in iter {
            list.add_last(x);
        }
        list
    }
}

impl<T: Clone> Clone for SLList<T> {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for SLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "null");
        }
        write!(f, "head")?;
        for x in self.iter() {
            write!(f, " -> {x:?}")?;
        }
        Ok(())
    }
}

/// [a b c ]の形式で表示する
impl<T: Clone + fmt::Display> fmt::Display for SLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for x in self.iter() {
            write!(f, "{x} ")?;
        }
        write!(f, "]")
    }
}
