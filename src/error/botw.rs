use thiserror::Error;

/// Domain errors from the Bias-of-the-Week rules.
///
/// Every message here is written for the invoking member: it states the
/// cause and, where useful, the remedy. These errors never change state.
#[derive(Error, Debug)]
pub enum BotwError {
    /// Bad arguments: unknown weekday, unparseable date, empty fields.
    #[error("{0}")]
    Validation(String),

    /// Another member in the guild already nominated this idol.
    #[error("**{group} {name}** has already been nominated by someone else. Pick a different bias.")]
    DuplicateIdol { group: String, name: String },

    /// The idol won within the renomination cooldown window.
    #[error("**{group} {name}** won within the last {cooldown_days} days and cannot be nominated again yet.")]
    RecentlyWon {
        group: String,
        name: String,
        cooldown_days: i32,
    },

    /// A winner pick was requested with no nominations on the book.
    #[error("There are no nominations to pick from.")]
    EmptyNominations,

    /// `skip` was requested after a winner had already been chosen.
    #[error("A winner has already been chosen for this week; the election can no longer be skipped.")]
    SkipAfterWinner,

    /// Strict catalog insertion of an idol that is already cataloged.
    #[error("**{group} {name}** is already in the idol catalog.")]
    AlreadyPresent { group: String, name: String },

    /// The invoking member lacks the required permission.
    #[error("You are not allowed to use this command.")]
    Forbidden,

    /// A referenced resource (role, channel, member) does not exist.
    #[error("{0}")]
    NotFound(String),
}
