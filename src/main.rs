use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use PrintQueueMini::core::buildcore::{Document, PrintQueue, SafeEventLog};

fn init_logging() -> Result<()> {
    let log_format = std::env::var("PRINT_QUEUE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("PrintQueueMini=info"))?;

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init()?,
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().compact())
            .try_init()?,
    }
    Ok(())
}

fn show(queue: &PrintQueue) {
    for line in queue.display() {
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    init_logging()?;

    let journal = SafeEventLog::new();
    let mut queue = PrintQueue::new().with_observer(journal.clone());

    println!("===== PRINT QUEUE SIMULATOR =====");

    println!("\n> Adding documents...");
    queue.enqueue(Document::new("Annual_Report.pdf", 50));
    queue.enqueue(Document::new("Marketing_Presentation.pptx", 25));
    queue.enqueue(Document::new("Cost_Sheet.xlsx", 5));
    queue.enqueue(Document::new("Event_Invite.docx", 1));
    show(&queue);

    println!("\n> Printing...");
    for _ in 0..2 {
        match queue.dequeue() {
            Ok(doc) => println!("Printing: {}", doc),
            Err(e) => warn!(error = %e, "nothing to print"),
        }
    }
    show(&queue);

    println!("\n> Checking next document...");
    match queue.peek() {
        Ok(doc) => println!("Next to print: {}", doc),
        Err(e) => warn!(error = %e, "nothing to print"),
    }

    println!("\n> Adding one more document...");
    queue.enqueue(Document::new("User_Manual.pdf", 150));
    show(&queue);

    println!("\n> Printing remaining documents...");
    while !queue.is_empty() {
        let doc = queue.dequeue()?;
        println!("Printing: {}", doc);
    }
    show(&queue);

    let log = journal.lock();
    let pages: u32 = log.printed().iter().map(Document::page_count).sum();
    info!(operations = log.len(), pages, "simulation finished");
    println!("\nSimulation finished.");
    Ok(())
}
