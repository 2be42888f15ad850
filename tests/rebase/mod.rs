mod interactive_rebase;
mod paused_rebase;
