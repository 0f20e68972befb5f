// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use letter_counter_core::DEFAULT_LETTER_SPEC;

use crate::{options::CliOutputFormat, parsers};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "letter_counter",
    version = crate::VERSION,
    about = "行末文字の集計ツール",
    long_about = "テキストファイルの各行の末尾文字（空白除去・大文字小文字無視）を数え、\n指定した文字ごとの行数を表示します。"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 集計するテキストファイル (text/plain)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// 対象文字（カンマ区切り, 例: e,t,h）。各要素は1文字である必要があります
    #[arg(short, long, default_value = DEFAULT_LETTER_SPEC, allow_hyphen_values = true, help_heading = "入力")]
    pub letters: String,

    /// 受け付けるメディアタイプ（複数可, 既定: text/plain）
    #[arg(long = "allow-type", value_name = "MEDIA_TYPE", value_parser = parsers::parse_media_type, help_heading = "入力")]
    pub allow_types: Vec<String>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// ファイル内容（File Data）を表示しない
    #[arg(long, help_heading = "出力")]
    pub no_preview: bool,

    /// 対象文字の検証のみ行う（有効なら終了コード 0）
    #[arg(long, conflicts_with_all = ["interactive", "watch"], help_heading = "動作")]
    pub check: bool,

    /// 対話モード（letters / file / submit コマンド）
    #[arg(short, long, conflicts_with = "watch", help_heading = "動作")]
    pub interactive: bool,

    /// ファイル変更を監視して再集計
    #[arg(long, requires = "file", help_heading = "動作")]
    pub watch: bool,

    /// 監視時のデバウンス間隔（秒）
    #[arg(long, default_value = "1", value_parser = parsers::parse_interval_secs, help_heading = "動作")]
    pub watch_interval: u64,

    /// デバッグログを標準エラーに出力（RUST_LOG が優先）
    #[arg(short, long, help_heading = "動作")]
    pub verbose: bool,
}

/// What the binary should do after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Check,
    Interactive,
    Watch,
    Once,
}

impl Args {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.interactive {
            Mode::Interactive
        } else if self.watch {
            Mode::Watch
        } else {
            Mode::Once
        }
    }
}
