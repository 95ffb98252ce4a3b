//! Password evaluator - combines the policy sections into a minimum edit count.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::CheckError;
use crate::sections::{
    length_section, repeat_section, variety_section, Coverage, LengthGap, RepeatRuns,
};
use crate::types::PasswordCheck;

/// Quiet period before an async evaluation starts.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EditPlan {
    insertions: usize,
    deletions: usize,
    replacements: usize,
}

impl EditPlan {
    fn steps(&self) -> usize {
        self.insertions + self.deletions + self.replacements
    }
}

fn plan_edits(length: LengthGap, coverage: &Coverage, runs: &RepeatRuns) -> EditPlan {
    let missing = coverage.missing();
    match length {
        // Every inserted character can also supply a missing class.
        LengthGap::TooShort(short) => EditPlan {
            insertions: short,
            deletions: 0,
            replacements: missing.saturating_sub(short),
        },
        LengthGap::Within => EditPlan {
            insertions: 0,
            deletions: 0,
            replacements: missing.max(runs.replacements()),
        },
        LengthGap::TooLong(excess) => EditPlan {
            insertions: 0,
            deletions: excess,
            replacements: missing.max(runs.replacements_after_deleting(excess)),
        },
    }
}

/// Returns the minimum number of single-character insertions, deletions or
/// replacements needed to make `password` strong.
///
/// Total over every string, the empty one included.
///
/// # Example
///
/// ```rust
/// use pwd_steps::strong_password_steps;
///
/// assert_eq!(strong_password_steps("Baaabb0"), 1);
/// assert_eq!(strong_password_steps(""), 6);
/// ```
pub fn strong_password_steps(password: &str) -> usize {
    let chars: Vec<char> = password.chars().collect();
    let length = length_section(chars.len());
    let coverage = variety_section(&chars);
    let runs = repeat_section(&chars);
    plan_edits(length, &coverage, &runs).steps()
}

/// Like [`strong_password_steps`], for callers whose password may be absent.
///
/// # Errors
///
/// Returns [`CheckError::InvalidArgument`] for `None`. An empty string is a
/// valid password and yields `Ok(6)`.
pub fn try_strong_password_steps(password: Option<&str>) -> Result<usize, CheckError> {
    password
        .map(strong_password_steps)
        .ok_or(CheckError::InvalidArgument)
}

/// Evaluates a password and returns the edit count with its breakdown and
/// the violated rules.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Errors
/// [`CheckError::Cancelled`] if the token is cancelled before a section runs.
pub fn evaluate_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<PasswordCheck, CheckError> {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let checkpoint = |_section: &str| -> Result<(), CheckError> {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password evaluation cancelled before section: {}", _section);
                return Err(CheckError::Cancelled);
            }
        }
        Ok(())
    };

    checkpoint("length")?;
    let length = length_section(chars.len());
    #[cfg(feature = "tracing")]
    tracing::debug!(section = "length", gap = ?length, "Section evaluated");

    checkpoint("variety")?;
    let coverage = variety_section(&chars);
    #[cfg(feature = "tracing")]
    tracing::debug!(section = "variety", missing = coverage.missing(), "Section evaluated");

    checkpoint("repeat")?;
    let runs = repeat_section(&chars);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        section = "repeat",
        replacements = runs.replacements(),
        one_mod = runs.one_mod(),
        two_mod = runs.two_mod(),
        "Section evaluated"
    );

    let reasons: Vec<String> = [length.reason(), coverage.reason(), runs.reason()]
        .into_iter()
        .flatten()
        .collect();

    let edits = plan_edits(length, &coverage, &runs);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        steps = edits.steps(),
        insertions = edits.insertions,
        deletions = edits.deletions,
        replacements = edits.replacements,
        "Password evaluated"
    );

    Ok(PasswordCheck {
        steps: edits.steps(),
        insertions: edits.insertions,
        deletions: edits.deletions,
        replacements: edits.replacements,
        reasons,
    })
}

/// Async version that sends the evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordCheck, CheckError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let result = evaluate_password(password, Some(token));

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
