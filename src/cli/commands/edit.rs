use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, parse_assignment};
use crate::errors::AppResult;
use crate::models::EditableField;
use crate::store::SessionStore;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        activity,
        comments,
        set,
    } = cmd
    {
        let mut pairs = set
            .iter()
            .map(|raw| parse_assignment(raw))
            .collect::<AppResult<Vec<_>>>()?;

        // explicit flags win over --set for the same field
        if let Some(a) = activity {
            pairs.push((EditableField::Activity.to_string(), a.clone()));
        }
        if let Some(c) = comments {
            pairs.push((EditableField::Comments.to_string(), c.clone()));
        }

        if pairs.is_empty() {
            warning("Nothing to change: use --activity, --comments or --set KEY=VALUE.");
            return Ok(());
        }

        let mut store = SessionStore::load(cfg.data_path());
        let record = EditLogic::apply(&mut store, *id, &pairs)?;

        success(format!(
            "Session #{} updated: activity='{}', comments='{}'",
            record.id, record.activity, record.comments
        ));
    }

    Ok(())
}
