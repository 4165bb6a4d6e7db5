//! 行単位の入力をリストに読み込む

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::interface::list::List;

/// 1行ずつadd(line)する。追加した行数を返す
///
/// 末尾に続く空白だけの行は追加しない
pub fn read_lines<L, R>(list: &mut L, reader: R) -> io::Result<usize>
where
    L: List<String>,
    R: BufRead,
{
    let mut count = 0;
    // 空白だけの行は、後ろに中身のある行が来たときにまとめて追加する
    let mut pending: Vec<String> = vec![];
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            pending.push(line);
            continue;
        }
        for blank in pending.drain(..) {
            list.add(blank);
            count += 1;
        }
        list.add(line);
        count += 1;
    }
    Ok(count)
}

/// ファイルを開いてread_linesする。開けなければErrを返す
pub fn read_file<L, P>(list: &mut L, path: P) -> io::Result<usize>
where
    L: List<String>,
    P: AsRef<Path>,
{
    let f = File::open(path)?;
    read_lines(list, BufReader::new(f))
}
