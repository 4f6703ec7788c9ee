use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use roster_analyze::{AnalyzeError, rules};
use roster_cli::export::{render_json, write_stats_csv};
use roster_cli::session::Session;
use roster_ingest::{expand_inputs, read_uploads};

use crate::cli::{AnalyzeArgs, OutputFormatArg, ThresholdsArgs};
use crate::progress::processing_pause;
use crate::summary::{apply_table_style, print_run};

pub fn run_thresholds(args: &ThresholdsArgs) -> Result<()> {
    if args.format == OutputFormatArg::Json {
        let catalogue: Vec<_> = rules::all_rules().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&catalogue).context("render json")?
        );
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Type", "Metric", "Warn below", "Message"]);
    apply_table_style(&mut table);
    for rule in rules::all_rules() {
        table.add_row(vec![
            rule.data_type.to_string(),
            rule.metric.to_string(),
            format!("{:.0}", rule.threshold),
            rule.message.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let span = info_span!("analyze", input_count = args.inputs.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut session = Session::new();
    let paths = expand_inputs(&args.inputs).context("resolve inputs")?;
    let batch = read_uploads(&paths).context("read input files")?;
    session.add_files(batch);
    for name in &args.exclude {
        session.remove_files_named(name);
    }
    if let Some(path) = &args.paste {
        session.set_pasted_text(read_pasted(path)?);
    }
    if session.files().is_empty() && session.pasted_text().trim().is_empty() {
        return Err(AnalyzeError::EmptyInput.into());
    }

    processing_pause(Duration::from_millis(args.delay_ms), "Analyzing rosters...");
    let run = session.analyze()?;

    match args.format {
        OutputFormatArg::Table => print_run(run),
        OutputFormatArg::Json => println!("{}", render_json(run).context("render json")?),
    }
    if let Some(path) = &args.export_csv {
        let file = File::create(path)
            .with_context(|| format!("create export: {}", path.display()))?;
        write_stats_csv(run, BufWriter::new(file))
            .with_context(|| format!("write export: {}", path.display()))?;
        info!(path = %path.display(), "wrote stats export");
    }
    info!(
        duration_ms = start.elapsed().as_millis(),
        "analyze command complete"
    );
    Ok(())
}

fn read_pasted(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read pasted text from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read pasted text: {}", path.display()))
}
