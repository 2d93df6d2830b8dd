//! dash-runner: headless driver for the account-risk dashboard.
//!
//! Usage:
//!   dash-runner --data-dir ./data
//!   dash-runner --asset-root ./public --search smith --risk high
//!   dash-runner --data-dir ./data --risk high --row 0
//!   dash-runner --data-dir ./data --ipc-mode

use anyhow::Result;
use riskguard_core::{
    account::{format_amount, BadgeVariant, RiskAccount, RiskLevelFilter, Tone},
    config::DashConfig,
    detail::{DetailSource, StaticDetailSource},
    event::ViewEvent,
    loader::{DatasetLoader, StaticDirSource},
    store::SqliteDetailSource,
    summary::DashboardSummary,
    view::{DetailView, LoadStatus, ViewMode, ViewState},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Event { event: ViewEvent },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    session_id: String,
    mode: ViewMode,
    status: LoadStatus,
    using_sample: bool,
    search_term: String,
    risk_level: RiskLevelFilter,
    risk_level_choices: Vec<UiChoice>,
    summary: DashboardSummary,
    rows: Vec<UiRow>,
    detail: Option<DetailView>,
}

#[derive(serde::Serialize)]
struct UiChoice {
    level: RiskLevelFilter,
    variant: BadgeVariant,
}

#[derive(serde::Serialize)]
struct UiRow {
    id: String,
    account_number: String,
    customer_name: String,
    risk_level: String,
    risk_badge: BadgeVariant,
    risk_tone: Tone,
    risk_score: f64,
    amount: String,
    flagged_transactions: u64,
    last_activity: String,
    activities: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = string_arg(&args, "--data-dir").unwrap_or("./data");

    let mut config = DashConfig::load(data_dir)?;
    if let Some(root) = string_arg(&args, "--asset-root") {
        config.asset_root = root.to_string();
    }
    if let Some(csv) = string_arg(&args, "--csv") {
        config.csv_path = csv.to_string();
    }

    let details = open_detail_source(&config)?;

    let mut view = ViewState::new();
    let loader = DatasetLoader::new(StaticDirSource::new(&config.asset_root), &config.csv_path);
    loader.load_into(&mut view);

    if ipc_mode {
        run_ipc_loop(&mut view, details.as_ref(), &config)?;
    } else {
        if let Some(term) = string_arg(&args, "--search") {
            view.apply(ViewEvent::SearchChanged { term: term.to_string() });
        }
        if let Some(level) = string_arg(&args, "--risk") {
            let level = level.parse::<RiskLevelFilter>().map_err(anyhow::Error::msg)?;
            view.apply(ViewEvent::RiskLevelChanged { level });
        }
        if let Some(row) = string_arg(&args, "--row") {
            view.apply(ViewEvent::RowSelected { row: row.parse()? });
        }
        print_dashboard(&view, details.as_ref(), &config);
    }

    Ok(())
}

fn open_detail_source(config: &DashConfig) -> Result<Box<dyn DetailSource>> {
    match &config.detail_db {
        Some(path) => {
            let store = SqliteDetailSource::open(path)?;
            store.migrate()?;
            log::info!("detail data from {path}");
            Ok(Box::new(store))
        }
        None => Ok(Box::new(StaticDetailSource::builtin())),
    }
}

fn run_ipc_loop(view: &mut ViewState, details: &dyn DetailSource, config: &DashConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::Event { event } => view.apply(event),
        }
        let state = build_ui_state(view, details, config);
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(view: &ViewState, details: &dyn DetailSource, config: &DashConfig) -> UiState {
    UiState {
        session_id: view.session_id().to_string(),
        mode: view.mode(),
        status: view.status(),
        using_sample: view.using_sample(),
        search_term: view.search_term().to_string(),
        risk_level: view.selected_risk_level(),
        risk_level_choices: RiskLevelFilter::CHOICES
            .iter()
            .map(|&level| UiChoice {
                level,
                variant: level.button_variant(view.selected_risk_level()),
            })
            .collect(),
        summary: view.summary(),
        rows: view
            .visible_accounts()
            .iter()
            .map(|a| ui_row(a, config.activity_preview))
            .collect(),
        detail: view.detail(details),
    }
}

fn ui_row(account: &RiskAccount, preview: usize) -> UiRow {
    UiRow {
        id: account.id.clone(),
        account_number: account.account_number.clone(),
        customer_name: account.customer_name.clone(),
        risk_level: account.risk_level.to_string(),
        risk_badge: account.risk_level.badge_variant(),
        risk_tone: account.risk_level.text_tone(),
        risk_score: account.risk_score,
        amount: format_amount(account.transaction_amount),
        flagged_transactions: account.flagged_transactions,
        last_activity: account.last_activity.clone(),
        activities: account.activity_preview(preview),
    }
}

fn print_dashboard(view: &ViewState, details: &dyn DetailSource, config: &DashConfig) {
    println!("Money Laundering Detection Dashboard");
    println!();

    match view.status() {
        LoadStatus::Loading => println!("Loading data from {}...", config.csv_path),
        LoadStatus::Error { message } => {
            println!("Error Loading Data: {message}");
            println!("Using fallback sample data for demonstration.");
        }
        LoadStatus::Ready => {}
    }

    if let Some(detail) = view.detail(details) {
        print_detail(&detail);
        return;
    }

    let summary = view.summary();
    println!("=== SUMMARY ===");
    println!("  risky accounts:        {}", summary.total_accounts);
    println!("  high risk accounts:    {}", summary.high_risk_accounts);
    println!("  flagged transactions:  {}", summary.total_flagged_transactions);
    println!("  total amount at risk:  ${}", format_amount(summary.total_suspicious_amount));
    println!();

    println!(
        "=== ACCOUNTS (search: {:?}, risk: {}) ===",
        view.search_term(),
        view.selected_risk_level().as_str()
    );
    let rows = view.visible_accounts();
    if rows.is_empty() {
        println!("  (no matching accounts)");
    }
    for a in &rows {
        println!(
            "  {:<16} {:<20} {:<6} {:>5}% ${:>12} {:>4} {}  {}",
            a.account_number,
            a.customer_name,
            a.risk_level,
            a.risk_score,
            format_amount(a.transaction_amount),
            a.flagged_transactions,
            a.last_activity,
            a.activity_preview(config.activity_preview).join(" | "),
        );
    }
}

fn print_detail(detail: &DetailView) {
    let a = &detail.account;
    println!("=== ACCOUNT {} ({} RISK) ===", a.account_number, a.risk_level);
    println!("  name:           {}", a.customer_name);
    println!("  email:          {}", a.email());
    println!("  phone:          {}", a.phone());
    println!("  address:        {}", a.address());
    println!("  opened:         {}", a.account_open_date());
    println!("  last activity:  {}", a.last_activity);
    println!("  risk score:     {}%", a.risk_score);
    println!("  total amount:   ${}", format_amount(a.transaction_amount));
    println!("  flagged txns:   {}", a.flagged_transactions);
    println!("  activities:     {}", a.suspicious_activity.join(", "));
    println!();

    println!("=== TRANSACTION HISTORY ({}) ===", detail.transactions.len());
    if detail.transactions.is_empty() {
        println!("  No transactions found");
    }
    for t in &detail.transactions {
        println!(
            "  {} {:<10} {:>12} {:<10} {} ({})",
            t.date,
            t.txn_type.as_str(),
            t.signed_amount(),
            t.status.as_str(),
            t.description,
            t.location.as_deref().unwrap_or("-"),
        );
    }
    println!();

    println!("=== TRANSACTION ANALYSIS ({} total) ===", detail.chart_total);
    for slice in &detail.chart {
        println!("  {:<24} {}", slice.name, slice.value);
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
