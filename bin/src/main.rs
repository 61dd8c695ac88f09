//! CLI for the Stockboard analytics library.
//!
//! Plays the role of the surrounding application: loads a daily price CSV
//! (columns `symbol,date,close[,volume]`), applies the same row hygiene the
//! price store applies, and prints the library's tables and summaries.

use clap::{Parser, Subcommand};
use polars::prelude::*;
use std::path::PathBuf;
use stockboard_analytics::{
    RiskConfig, average_monthly_returns, filter_year, kpi_summary, monthly_returns,
    return_correlation, risk_table, yearly_returns,
};

#[derive(Parser)]
#[command(name = "stockboard")]
#[command(about = "Returns and risk analytics over daily stock prices", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file with columns: symbol, date, close, volume (volume optional)
    #[arg(long)]
    data: PathBuf,

    /// Restrict to these symbols (comma separated); default is all
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// KPI summary across the selected symbols
    Summary {
        /// Annual risk-free rate for the Sharpe ratio
        #[arg(long, default_value_t = 0.04)]
        rf: f64,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Percentile-based risk table, riskiest symbol first
    Risk {
        /// Trailing window of daily returns for the volatility component
        #[arg(long, default_value_t = 30)]
        window: usize,
    },
    /// Monthly return table
    Monthly {
        /// Only this calendar year (drilldown)
        #[arg(long)]
        year: Option<i32>,
        /// Average each month across years instead
        #[arg(long)]
        seasonality: bool,
    },
    /// Yearly return table
    Yearly,
    /// Return correlation matrix
    Correlation,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> stockboard_analytics::Result<()> {
    let table = load_prices(&cli.data, &cli.symbols)?;
    if table.height() == 0 {
        println!("No data for the requested symbols.");
        return Ok(());
    }

    match &cli.command {
        Commands::Summary { rf, json } => print_summary(&table, *rf, *json)?,
        Commands::Risk { window } => {
            let result = risk_table(&table, &RiskConfig::with_window(*window))?;
            print_table(&result);
        }
        Commands::Monthly { year, seasonality } => {
            let scoped = match year {
                Some(year) => filter_year(&table, *year)?,
                None => table,
            };
            let monthly = monthly_returns(&scoped)?;
            if *seasonality {
                print_table(&average_monthly_returns(&monthly)?);
            } else {
                print_table(&monthly);
            }
        }
        Commands::Yearly => print_table(&yearly_returns(&table)?),
        Commands::Correlation => print_table(&return_correlation(&table)?),
    }
    Ok(())
}

/// Load and clean the price CSV.
///
/// Mirrors what the price store guarantees the analytics layer: rows with a
/// null date or close are dropped, volume defaults to 0, and the result is
/// sorted by (symbol, date). A requested symbol with no rows simply
/// contributes nothing.
fn load_prices(path: &PathBuf, symbols: &[String]) -> stockboard_analytics::Result<DataFrame> {
    let mut df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_try_parse_dates(true)
        .finish()?
        .collect()?;

    if df.column("volume").is_err() {
        let zeros = Column::new("volume".into(), vec![0.0; df.height()]);
        df.with_column(zeros)?;
    }

    let mut lf = df
        .lazy()
        .filter(col("date").is_not_null().and(col("close").is_not_null()))
        .with_columns([
            col("close").cast(DataType::Float64),
            col("volume").cast(DataType::Float64).fill_null(lit(0.0)),
        ]);

    if let Some(filter) = symbols
        .iter()
        .map(|s| col("symbol").eq(lit(s.as_str())))
        .reduce(|a, b| a.or(b))
    {
        lf = lf.filter(filter);
    }

    let cleaned = lf
        .sort(
            ["symbol", "date"],
            SortMultipleOptions::default().with_order_descending_multi([false, false]),
        )
        .collect()?;
    Ok(cleaned)
}

fn print_table(df: &DataFrame) {
    if df.height() == 0 {
        println!("No rows to show.");
    } else {
        println!("{df}");
    }
}

fn print_summary(table: &DataFrame, rf: f64, json: bool) -> stockboard_analytics::Result<()> {
    let summary = kpi_summary(table, rf)?;

    if json {
        let rendered = serde_json::to_string_pretty(&summary).unwrap_or_else(|err| {
            eprintln!("Error: could not serialize summary: {err}");
            std::process::exit(1);
        });
        println!("{rendered}");
        return Ok(());
    }

    println!("Symbols selected: {}", summary.symbols);
    println!("Best avg yearly return:  {}", fmt_stat(&summary.best_yearly));
    println!("Worst avg yearly return: {}", fmt_stat(&summary.worst_yearly));
    println!("Top avg monthly return:  {}", fmt_stat(&summary.top_avg_monthly));
    println!("Best CAGR:               {}", fmt_stat(&summary.best_cagr));
    println!("Best Sharpe (rf={rf}):   {}", fmt_stat(&summary.best_sharpe));
    match summary.mean_ann_vol {
        Some(vol) => println!("Mean annualized vol:     {:.2}%", vol * 100.0),
        None => println!("Mean annualized vol:     n/a"),
    }
    Ok(())
}

fn fmt_stat(stat: &Option<stockboard_analytics::SymbolStat>) -> String {
    stat.as_ref()
        .map_or_else(|| "n/a".to_string(), ToString::to_string)
}
