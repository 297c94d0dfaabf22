//! Ready event handler for bot initialization.

use serenity::all::{ActivityData, Context, Ready};
use tracing::info;

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the nominations")));
}
