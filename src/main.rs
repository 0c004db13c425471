use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use eyre::{Result, eyre};
use kanbanstore::{
    BackendKind, Board, Config, DueState, FileBackend, FilterPatch, Priority, SnapshotBackend, SqliteBackend, Task,
    TaskStatus, TaskUpdate, VisibleIndex, now,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Kanban board with columns by status, filters and a persisted snapshot")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the store directory (default: platform data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    /// Snapshot backend, overrides kanban.yml
    #[arg(long, value_enum)]
    backend: Option<BackendKind>,

    /// Log store operations to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filtered board, one section per column
    Board,

    /// Show all filtered tasks as a table
    Backlog,

    /// Show one task in full
    Show { id: String },

    /// Create a task at the end of its column
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(long, default_value = "scheduled")]
        status: TaskStatus,
        #[arg(short, long, default_value = "")]
        assignee: String,
        /// Repeat for several tags
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        /// YYYY-MM-DD or RFC 3339
        #[arg(long, value_parser = parse_due)]
        due: Option<DateTime<Utc>>,
    },

    /// Change fields of a task
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(short, long)]
        assignee: Option<String>,
        /// Replaces all tags; repeat for several
        #[arg(short, long = "tag")]
        tags: Option<Vec<String>>,
        #[arg(short, long, conflicts_with = "clear_priority")]
        priority: Option<Priority>,
        #[arg(long)]
        clear_priority: bool,
        #[arg(long, value_parser = parse_due, conflicts_with = "clear_due")]
        due: Option<DateTime<Utc>>,
        #[arg(long)]
        clear_due: bool,
    },

    /// Delete a task
    Delete { id: String },

    /// Move a task to another column
    Move {
        id: String,
        status: TaskStatus,
        /// Position among the column's visible tasks (default: end)
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Reorder a column by visible position
    Reorder { status: TaskStatus, from: usize, to: usize },

    /// Narrow the board; unspecified dimensions are kept
    Filter {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long, conflicts_with = "any_assignee")]
        assignee: Option<String>,
        /// Drop the assignee filter
        #[arg(long)]
        any_assignee: bool,
        /// Match tasks carrying any of these tags; repeat for several
        #[arg(short, long = "tag")]
        tags: Option<Vec<String>>,
    },

    /// Reset all filters
    ClearFilters,

    /// List known assignees
    Assignees,

    /// List known tags
    Tags,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let store_path = cli.store_path.unwrap_or_else(Config::default_store_dir);
    let config = Config::load(&store_path)?;
    let backend = cli.backend.unwrap_or(config.backend);

    match backend {
        BackendKind::File => {
            let board = open_board(FileBackend::new(&store_path, &config.slot), &config)?;
            run(board, cli.command)
        }
        BackendKind::Sqlite => {
            let board = open_board(SqliteBackend::open(&store_path, &config.slot)?, &config)?;
            run(board, cli.command)
        }
    }
}

fn open_board<B: SnapshotBackend>(backend: B, config: &Config) -> Result<Board<B>> {
    if config.seed_defaults {
        Board::open(backend)
    } else {
        Board::open_with(backend, Vec::new)
    }
}

fn run<B: SnapshotBackend>(mut board: Board<B>, command: Commands) -> Result<()> {
    match command {
        Commands::Board => print_board(&board),
        Commands::Backlog => print_backlog(&board),
        Commands::Show { id } => {
            let task = board
                .store()
                .task(&id)
                .ok_or_else(|| eyre!("No task with id {}", id))?;
            print_detail(task);
        }
        Commands::Add {
            title,
            description,
            status,
            assignee,
            tags,
            priority,
            due,
        } => {
            let created = now();
            let id = board.store().next_task_id(created);
            let mut task = Task::new(id.clone(), title, status, created)
                .with_description(description)
                .with_assignee(assignee)
                .with_tags(tags)
                .with_sort_order(board.store().next_sort_order(status));
            task.priority = priority;
            task.due_date = due;

            board.mutate(|store| store.add_task(task));
            println!("Created {}", id.bold());
        }
        Commands::Update {
            id,
            title,
            description,
            status,
            assignee,
            tags,
            priority,
            clear_priority,
            due,
            clear_due,
        } => {
            let update = TaskUpdate {
                title,
                description,
                status,
                assignee,
                tags,
                priority: if clear_priority { Some(None) } else { priority.map(Some) },
                due_date: if clear_due { Some(None) } else { due.map(Some) },
                ..Default::default()
            };
            if update.is_empty() {
                return Err(eyre!("Nothing to update"));
            }
            require_task(&board, &id)?;
            board.mutate(|store| store.update_task(&id, update));
            println!("Updated {}", id.bold());
        }
        Commands::Delete { id } => {
            require_task(&board, &id)?;
            board.mutate(|store| store.delete_task(&id));
            println!("Deleted {}", id.bold());
        }
        Commands::Move { id, status, index } => {
            require_task(&board, &id)?;
            let index = VisibleIndex(index.unwrap_or(usize::MAX));
            board.mutate(|store| store.move_task_to_column(&id, status, index));
            println!("Moved {} to {}", id.bold(), status_label(status));
        }
        Commands::Reorder { status, from, to } => {
            let visible = board.store().tasks_by_status(status).len();
            if from >= visible {
                return Err(eyre!(
                    "No task at position {} in {} ({} visible)",
                    from,
                    status,
                    visible
                ));
            }
            board.mutate(|store| store.reorder_tasks_in_column(status, from.into(), to.into()));
            print_board(&board);
        }
        Commands::Filter {
            search,
            assignee,
            any_assignee,
            tags,
        } => {
            let patch = FilterPatch {
                search,
                assignee: if any_assignee { Some(None) } else { assignee.map(Some) },
                tags,
            };
            board.mutate(|store| store.set_filter(patch));
            print_board(&board);
        }
        Commands::ClearFilters => {
            board.mutate(|store| store.clear_filters());
            println!("Filters cleared");
        }
        Commands::Assignees => {
            for assignee in board.store().assignees() {
                println!("{}", assignee);
            }
        }
        Commands::Tags => {
            for tag in board.store().all_tags() {
                println!("#{}", tag);
            }
        }
    }

    Ok(())
}

fn require_task<B: SnapshotBackend>(board: &Board<B>, id: &str) -> Result<()> {
    if board.store().task(id).is_none() {
        return Err(eyre!("No task with id {}", id));
    }
    Ok(())
}

fn parse_due(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid date '{}': {}", s, e))
}

// ============================================================================
// Output
// ============================================================================

fn status_label(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::Scheduled => status.title().white().bold(),
        TaskStatus::InProgress => status.title().blue().bold(),
        TaskStatus::Done => status.title().green().bold(),
    }
}

fn priority_label(priority: Option<Priority>) -> ColoredString {
    match priority {
        None => "-".dimmed(),
        Some(p @ Priority::Low) => p.as_str().green(),
        Some(p @ Priority::Medium) => p.as_str().yellow(),
        Some(p @ Priority::High) => p.as_str().truecolor(255, 165, 0),
        Some(p @ Priority::Critical) => p.as_str().red().bold(),
    }
}

fn due_label(task: &Task, format: &str) -> Option<ColoredString> {
    let due = task.due_date?;
    let text = due.format(format).to_string();
    Some(match task.due_state(now())? {
        DueState::Overdue => text.red(),
        DueState::DueSoon => text.yellow(),
        DueState::Upcoming => text.blue(),
    })
}

fn print_filters<B: SnapshotBackend>(board: &Board<B>) {
    let filters = board.store().filters();
    if !filters.is_active() {
        return;
    }
    let mut parts = Vec::new();
    if !filters.search.is_empty() {
        parts.push(format!("search \"{}\"", filters.search));
    }
    if let Some(assignee) = filters.assignee.as_deref().filter(|a| !a.is_empty()) {
        parts.push(format!("assignee {}", assignee));
    }
    if !filters.tags.is_empty() {
        parts.push(format!("tags {}", filters.tags.join(", ")));
    }
    println!("{} {}\n", "Filtered by".dimmed(), parts.join("; "));
}

fn print_card(index: usize, task: &Task) {
    let mut line = format!("  {:>2}. {} {}", index, task.id.dimmed(), task.title);
    if task.priority.is_some() {
        line.push_str(&format!(" [{}]", priority_label(task.priority)));
    }
    if !task.assignee.is_empty() {
        line.push_str(&format!(" @{}", task.assignee.cyan()));
    }
    for tag in &task.tags {
        line.push_str(&format!(" {}", format!("#{}", tag).magenta()));
    }
    if let Some(due) = due_label(task, "%b %-d") {
        line.push_str(&format!(" due {}", due));
    }
    let (completed, total) = task.subtask_progress();
    if total > 0 {
        line.push_str(&format!(" ({}/{})", completed, total));
    }
    println!("{}", line);
}

fn print_board<B: SnapshotBackend>(board: &Board<B>) {
    print_filters(board);
    for status in TaskStatus::ALL {
        let tasks = board.store().tasks_by_status(status);
        println!("{} {}", status_label(status), format!("({})", tasks.len()).dimmed());
        if tasks.is_empty() {
            println!("  {}", format!("No tasks in {}", status.title().to_lowercase()).dimmed());
        }
        for (index, task) in tasks.iter().enumerate() {
            print_card(index, task);
        }
        println!();
    }
}

fn print_backlog<B: SnapshotBackend>(board: &Board<B>) {
    print_filters(board);
    let tasks = board.store().filtered_tasks();
    if tasks.is_empty() {
        println!("{}", "No tasks match the current filters".dimmed());
        return;
    }

    println!(
        "{:<12} {:<36} {:<12} {:<16} {:<9} {}",
        "ID".bold(),
        "TITLE".bold(),
        "STATUS".bold(),
        "ASSIGNEE".bold(),
        "PRIORITY".bold(),
        "DUE".bold()
    );
    for task in tasks {
        let due = due_label(task, "%b %-d, %Y").unwrap_or_else(|| "-".dimmed());
        println!(
            "{:<12} {:<36} {:<12} {:<16} {:<9} {}",
            task.id,
            truncate(&task.title, 36),
            status_label(task.status),
            task.assignee,
            priority_label(task.priority),
            due
        );
    }
}

fn print_detail(task: &Task) {
    println!("{} {}", task.id.dimmed(), task.title.bold());
    println!("{:<10} {}", "Status", status_label(task.status));
    println!("{:<10} {}", "Priority", priority_label(task.priority));
    println!(
        "{:<10} {}",
        "Assignee",
        if task.assignee.is_empty() { "-" } else { task.assignee.as_str() }
    );
    if !task.tags.is_empty() {
        println!("{:<10} {}", "Tags", task.tags.join(", "));
    }
    if let Some(due) = due_label(task, "%B %-d, %Y") {
        println!("{:<10} {}", "Due", due);
    }
    println!("{:<10} {}", "Created", task.created_at.format("%B %-d, %Y %H:%M"));
    println!("{:<10} {}", "Updated", task.updated_at.format("%B %-d, %Y %H:%M"));

    if !task.description.is_empty() {
        println!("\n{}", task.description);
    }

    if let Some(subtasks) = &task.subtasks {
        let (completed, total) = task.subtask_progress();
        println!("\n{} {}", "Subtasks".bold(), format!("({}/{})", completed, total).dimmed());
        for subtask in subtasks {
            if subtask.completed {
                println!("  [x] {}", subtask.title.strikethrough().dimmed());
            } else {
                println!("  [ ] {}", subtask.title);
            }
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
