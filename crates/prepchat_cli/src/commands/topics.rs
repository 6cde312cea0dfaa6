//! `prepchat topics` — list the quick study topics.

use anyhow::Result;

use crate::output;
use crate::topics::TOPICS;

pub async fn handle() -> Result<()> {
    output::header("Quick study topics");
    let rows: Vec<(usize, &str)> = TOPICS
        .iter()
        .enumerate()
        .map(|(i, (title, _))| (i + 1, *title))
        .collect();
    output::topics_table(&rows);
    output::dim("Run `prepchat chat` and use /topics <n> to ask about one.");
    Ok(())
}
