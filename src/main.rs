//! Tome - 纯文本小说卷/章切分
//!
//! 命令行入口：读取 → 解码 → 切分 → 导出

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use tome::application::{
    BookMetadata, ExportFormat, ExportManuscript, ExportManuscriptHandler, ParseManuscript,
    ParseManuscriptHandler,
};
use tome::config::{load_config_from_path, load_rules_file, print_config, AppConfig, LogConfig};
use tome::domain::manuscript::RuleOverrides;
use tome::infrastructure::{default_exporters, ChardetTextDecoder, ConsoleProgress, FileSourceReader};

#[derive(Debug, Parser)]
#[command(name = "tome", version, about = "将纯文本小说切分为卷/章结构")]
struct Cli {
    /// 输入文本文件
    input: PathBuf,

    /// 输出文件（默认输出到 stdout）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 导出格式: outline | json | html
    #[arg(long)]
    format: Option<ExportFormat>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 规则文件（TOML，顶层为规则键）
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 卷标题正则（替换默认卷规则）
    #[arg(long, value_parser = parse_regex)]
    volume_regex: Option<String>,

    /// 章节标题正则（替换默认章节规则）
    #[arg(long, value_parser = parse_regex)]
    chapter_regex: Option<String>,

    /// 排除行正则（替换默认排除规则）
    #[arg(long, value_parser = parse_regex)]
    exclude_regex: Option<String>,

    /// 作者
    #[arg(long)]
    author: Option<String>,

    /// 语言
    #[arg(long)]
    language: Option<String>,

    /// 书名（默认取输入文件名）
    #[arg(long)]
    title: Option<String>,

    /// 显示进度条
    #[arg(long)]
    progress: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

/// 正则在进入解析前校验
fn parse_regex(pattern: &str) -> Result<String, String> {
    regex::Regex::new(pattern)
        .map(|_| pattern.to_string())
        .map_err(|e| format!("无效的正则表达式: {}", e))
}

fn init_tracing(log: &LogConfig, verbose: bool) {
    let directive = if verbose {
        "debug,tome=debug".to_string()
    } else {
        log.filter_directive()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 配置文件 < 规则文件 < 命令行正则
fn collect_overrides(cli: &Cli, config: &AppConfig) -> anyhow::Result<RuleOverrides> {
    let mut overrides = config.rules.clone();

    if let Some(path) = &cli.rules {
        let rules = load_rules_file(path)
            .with_context(|| format!("Failed to load rules file {}", path.display()))?;
        overrides = overrides.overlay(rules);
    }

    let from_cli = RuleOverrides {
        volume_patterns: cli.volume_regex.clone().map(|p| vec![p]),
        chapter_patterns: cli.chapter_regex.clone().map(|p| vec![p]),
        exclude_patterns: cli.exclude_regex.clone().map(|p| vec![p]),
        ..Default::default()
    };

    Ok(overrides.overlay(from_cli))
}

fn book_title(cli: &Cli) -> String {
    cli.title.clone().unwrap_or_else(|| {
        cli.input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    })
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Output written");
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log, cli.verbose);
    print_config(&config);

    let overrides = collect_overrides(&cli, &config)?;

    let mut parse_handler = ParseManuscriptHandler::new(
        Arc::new(FileSourceReader::new()),
        Arc::new(ChardetTextDecoder::new()),
    );
    if cli.progress {
        parse_handler = parse_handler.with_progress(Arc::new(ConsoleProgress::new()));
    }

    let mut command = ParseManuscript::new(cli.input.clone());
    if !overrides.is_empty() {
        command = command.with_overrides(overrides);
    }

    let parsed = parse_handler
        .handle(command)
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;

    let metadata = BookMetadata::new(
        book_title(&cli),
        cli.author.clone().unwrap_or_else(|| config.output.author.clone()),
        cli.language.clone().unwrap_or_else(|| config.output.language.clone()),
    );
    let format = cli.format.unwrap_or(config.output.format);

    let export_handler = ExportManuscriptHandler::new(default_exporters());
    let exported = export_handler.handle(ExportManuscript {
        volumes: parsed.volumes,
        metadata,
        format,
    })?;

    write_output(cli.output.as_deref(), &exported.content)?;

    Ok(())
}
