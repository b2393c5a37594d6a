use pilist_application::ports::DomainListRepository;
use pilist_application::use_cases::ListSelection;
use pilist_domain::{Config, DomainError, ListAction};
use pilist_infrastructure::repositories::SqliteDomainListRepository;
use std::sync::Arc;
use tracing::info;

use crate::bootstrap;
use crate::di::{self, Services};
use crate::prompt::Prompt;
use crate::session::ConnectionSlot;

pub struct ImportArgs {
    pub selection: ListSelection,
    pub action: ListAction,
    pub assume_yes: bool,
}

pub async fn run(
    config: &Config,
    services: &Services,
    args: ImportArgs,
    prompt: &mut Prompt,
    slot: &ConnectionSlot,
) -> anyhow::Result<()> {
    let batch = services.load_list.execute(&args.selection).await?;
    if batch.is_empty() {
        return Err(DomainError::EmptyBatch.into());
    }

    if !args.assume_yes {
        let question = confirm_question(batch.len(), &config.database.path);
        if !prompt.confirm(&question).await? {
            println!("Nothing changed. Bye!");
            return Ok(());
        }
    }

    let pool = bootstrap::init_database(&config.database).await?;
    slot.hold(pool.clone()).await;

    let repository = Arc::new(SqliteDomainListRepository::new(pool));
    let result = di::import_use_case(repository.clone())
        .execute(&batch, args.action)
        .await;
    repository.close().await;

    let summary = result?;
    info!(
        added = summary.added,
        existing = summary.existing,
        "Import committed"
    );

    println!(
        "{} domains added! {} already existed.",
        summary.added, summary.existing
    );
    println!("Update Gravity through the web interface or by running:\n\t# pihole -g");

    Ok(())
}

fn confirm_question(count: usize, database: &str) -> String {
    format!("Add {} domains to {}?", count, database)
}
