use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use open_sequences::data_structure::array_list::ArrayList;
use open_sequences::data_structure::dl_list::DLList;
use open_sequences::data_structure::sl_list::SLList;
use open_sequences::ingest;
use open_sequences::interface::list::List;
use open_sequences::render;

/// 1行1要素のファイルを3種類のリストに読み込み、前から・後ろから表示する
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 読み込むファイル(例: countries.txt)
    path: PathBuf,
    /// 使うリストの種類
    #[arg(short, long, value_enum, default_value_t = Kind::All)]
    kind: Kind,
    /// 読み込んだ行数などを標準エラーに出す
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Array,
    Singly,
    Doubly,
    All,
}

impl Kind {
    fn includes(self, other: Kind) -> bool {
        self == Kind::All || self == other
    }
}

fn load<L: List<String>>(list: &mut L, name: &str, path: &Path, verbose: bool) -> anyhow::Result<()> {
    let count = ingest::read_file(list, path)
        .with_context(|| format!("File not found: {}", path.display()))?;
    if verbose {
        eprintln!("{name}: read {count} lines from {}", path.display());
    }
    Ok(())
}

fn print_section(title: &str, rendered: &str) {
    println!("{title}:");
    println!("{rendered}");
    println!();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut array = ArrayList::new();
    let mut singly = SLList::new();
    let mut doubly = DLList::new();

    let mut forward = vec![];
    let mut backward = vec![];

    if cli.kind.includes(Kind::Array) {
        load(&mut array, "Array List", &cli.path, cli.verbose)?;
        forward.push(("Array List", render::forward(&array)));
        backward.push(("Array List", render::backward(&array)));
    }
    if cli.kind.includes(Kind::Singly) {
        load(&mut singly, "Linked List", &cli.path, cli.verbose)?;
        forward.push(("Linked List", render::forward(&singly)));
        backward.push(("Linked List", render::backward(&singly)));
    }
    if cli.kind.includes(Kind::Doubly) {
        load(&mut doubly, "Doubly Linked List", &cli.path, cli.verbose)?;
        forward.push(("Doubly Linked List", render::forward(&doubly)));
        backward.push(("Doubly Linked List", render::backward(&doubly)));
    }

    for (name, rendered) in &forward {
        print_section(&format!("{name} (Forward)"), rendered);
    }
    for (name, rendered) in &backward {
        print_section(&format!("{name} (Backward)"), rendered);
    }

    Ok(())
}
