use super::step::Migration;
use crate::session::Session;
use crate::supabase::{Credentials, SupabaseClient, SupabaseError};

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("sign in failed: {0}")]
    SignIn(#[source] SupabaseError),

    #[error("remote procedure `{procedure}` failed: {source}")]
    RemoteProcedureFailure {
        procedure: String,
        #[source]
        source: SupabaseError,
    },
}

/// What happened when a migration ran.
#[derive(Debug)]
pub struct MigrationReport {
    pub migration: String,
    /// Procedures that completed, in order.
    pub completed: Vec<String>,
    /// Steps never attempted because an earlier one failed.
    pub skipped: Vec<String>,
    pub failure: Option<MigrationError>,
    /// `false` when sign-in failed or the closing sign-out did.
    pub signed_out: bool,
}

impl MigrationReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn into_result(self) -> Result<Vec<String>, MigrationError> {
        match self.failure {
            None => Ok(self.completed),
            Some(err) => Err(err),
        }
    }
}

struct StepsOutcome {
    completed: Vec<String>,
    skipped: Vec<String>,
    failure: Option<MigrationError>,
}

/// Runs `migration` as the admin identified by `credentials`.
///
/// The session is always signed out once a sign-in succeeded, whether the
/// steps succeeded or not.
pub async fn run_migration(
    client: &SupabaseClient,
    credentials: &Credentials,
    migration: &Migration,
) -> MigrationReport {
    log::info!(
        "Running migration `{}` ({} steps)",
        migration.name,
        migration.steps.len()
    );

    let scope = client
        .with_session(credentials, async |session: &Session| {
            run_steps(client, session, migration).await
        })
        .await;

    match scope {
        Ok(scope) => {
            let StepsOutcome {
                completed,
                skipped,
                failure,
            } = scope.output;
            if failure.is_none() {
                log::info!("Migration `{}` completed", migration.name);
            }
            MigrationReport {
                migration: migration.name.clone(),
                completed,
                skipped,
                failure,
                signed_out: scope.signed_out,
            }
        }
        Err(err) => {
            log::error!("Migration `{}` could not sign in: {err}", migration.name);
            MigrationReport {
                migration: migration.name.clone(),
                completed: Vec::new(),
                skipped: migration.steps.iter().map(|s| s.procedure.clone()).collect(),
                failure: Some(MigrationError::SignIn(err)),
                signed_out: false,
            }
        }
    }
}

async fn run_steps(
    client: &SupabaseClient,
    session: &Session,
    migration: &Migration,
) -> StepsOutcome {
    let mut completed = Vec::with_capacity(migration.steps.len());

    for (index, step) in migration.steps.iter().enumerate() {
        log::info!("Step {}: {}", index + 1, step.describe());

        match client.rpc(session, &step.procedure, &step.params).await {
            Ok(result) => {
                log::debug!("`{}` returned {result}", step.procedure);
                completed.push(step.procedure.clone());
            }
            Err(source) => {
                log::error!("Step {} `{}` failed: {source}", index + 1, step.procedure);
                return StepsOutcome {
                    completed,
                    skipped: migration.steps[index + 1..]
                        .iter()
                        .map(|s| s.procedure.clone())
                        .collect(),
                    failure: Some(MigrationError::RemoteProcedureFailure {
                        procedure: step.procedure.clone(),
                        source,
                    }),
                };
            }
        }
    }

    StepsOutcome {
        completed,
        skipped: Vec::new(),
        failure: None,
    }
}
