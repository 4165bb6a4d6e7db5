use std::fmt;

use crate::error::{ListError, Result};
use crate::interface::list::List;
use crate::interface::list_iterator::ListIterator;

/// 容量を指定しなかったときの初期容量
pub const DEFAULT_CAPACITY: usize = 10;

// 拡張時は容量を1.5倍(切り捨て)にする
const GROWTH_NUMERATOR: usize = 3;
const GROWTH_DENOMINATOR: usize = 2;

/// 拡張後の容量。floor(capacity * 1.5)だが、最低でも1つは増やす
pub fn grown_capacity(capacity: usize) -> usize {
    std::cmp::max(capacity * GROWTH_NUMERATOR / GROWTH_DENOMINATOR, capacity + 1)
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// 配列を使ったListの実装
///
/// get(i), set(i,x)の実行時間はO(1)
/// add(i,x), remove(i)の実行時間はresize()のコストを無視するとO(1 + n - i)
///
/// a.len()が容量で、a[n]..a[a.len()-1]は常にNone
#[derive(Clone)]
pub struct ArrayList<T> {
    a: Box<[Option<T>]>,
    n: usize, // リストの要素数
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            a: empty_slots(capacity),
            n: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.a.len()
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 要素を全て捨てる。容量はそのまま
    pub fn clear(&mut self) {
        for slot in self.a[..self.n].iter_mut() {
            *slot = None;
        }
        self.n = 0;
    }

    fn out_of_bounds(&self, i: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index: i,
            size: self.n,
        }
    }

    /// x(i)の値を返す。O(1)
    pub fn get(&self, i: usize) -> Result<&T> {
        self.a[..self.n]
            .get(i)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(i))
    }

    /// x(i)の値をxにして、以前の値を返す。O(1)
    pub fn set(&mut self, i: usize, x: T) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_bounds(i));
        }
        let err = self.out_of_bounds(i);
        self.a[i].replace(x).ok_or(err)
    }

    /// xをi番目として追加し、x(i)..x(n-1)を後ろにずらす
    pub fn add_at(&mut self, i: usize, x: T) -> Result<()> {
        if i > self.n {
            return Err(self.out_of_bounds(i));
        }
        self.ensure_capacity();
        // 上書きしないように後ろから順にずらす
        for j in (i..self.n).rev() {
            self.a[j + 1] = self.a[j].take();
        }
        self.a[i] = Some(x);
        self.n += 1;
        Ok(())
    }

    /// x(i)を削除し、x(i+1)..x(n-1)を前にずらす
    pub fn remove(&mut self, i: usize) -> Result<T> {
        if i >= self.n {
            return Err(self.out_of_bounds(i));
        }
        let err = self.out_of_bounds(i);
        let x = self.a[i].take();
        for j in i..(self.n - 1) {
            self.a[j] = self.a[j + 1].take();
        }
        self.n -= 1;
        x.ok_or(err)
    }

    /// xと等しい最初の要素を削除する。削除したかどうかを返す。O(n)
    pub fn remove_item(&mut self, x: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|y| y == x) {
            Some(i) => self.remove(i).is_ok(),
            None => false,
        }
    }

    /// 容量を要素数ちょうどに縮める
    pub fn trim_to_size(&mut self) {
        if self.n != self.a.len() {
            self.resize(self.n);
        }
    }

    fn ensure_capacity(&mut self) {
        if self.n >= self.a.len() {
            self.resize(grown_capacity(self.a.len()));
        }
    }

    // 新しい配列に要素を移してから置き換える
    fn resize(&mut self, capacity: usize) {
        let mut b = empty_slots(capacity);
        for i in 0..self.n {
            b[i] = self.a[i].take();
        }
        self.a = b;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            a: &self.a[..self.n],
            current: 0,
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> for ArrayList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;
    type ListIter<'a>
        = ListIter<'a, T>
    where
        Self: 'a;

    fn add(&mut self, x: T) -> bool {
        self.add_at(self.n, x).is_ok()
    }

    fn size(&self) -> usize {
        self.n
    }

    fn iter(&self) -> Iter<'_, T> {
        ArrayList::iter(self)
    }

    fn list_iterator(&self) -> ListIter<'_, T> {
        ListIter {
            a: &self.a[..self.n],
            cursor: 0,
        }
    }

    fn list_iterator_at(&self, index: usize) -> Result<ListIter<'_, T>> {
        if index > self.n {
            return Err(self.out_of_bounds(index));
        }
        Ok(ListIter {
            a: &self.a[..self.n],
            cursor: self.n,
        })
    }
}

/// 先頭から順に要素を返すイテレータ
pub struct Iter<'a, T> {
    a: &'a [Option<T>],
    current: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let x = self.a.get(self.current)?.as_ref();
        self.current += 1;
        x
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.a.len().saturating_sub(self.current);
        (rest, Some(rest))
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// ArrayListのListIterator
///
/// cursorはnext()で返す要素の添字
pub struct ListIter<'a, T> {
    a: &'a [Option<T>],
    cursor: usize,
}

impl<'a, T> ListIterator for ListIter<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.cursor < self.a.len()
    }

    fn next(&mut self) -> Result<&'a T> {
        let x = self
            .a
            .get(self.cursor)
            .and_then(Option::as_ref)
            .ok_or(ListError::Exhausted)?;
        self.cursor += 1;
        Ok(x)
    }

    fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    fn previous(&mut self) -> Result<&'a T> {
        if !self.has_previous() {
            return Err(ListError::Exhausted);
        }
        self.cursor -= 1;
        self.a[self.cursor].as_ref().ok_or(ListError::Exhausted)
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        for x in iter {
            list.add(x);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// [a, b, c]の形式で表示する
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}
