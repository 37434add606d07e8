use crate::content::{BOT_COMMAND_EXAMPLES, BOT_COMMANDS, BotCommand};
use leptos::prelude::*;

#[component]
pub fn BotCommands() -> impl IntoView {
    view! {
        <section id="models" class="bot-commands">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Все команды бота"</h2>
                    <p class="section-description">"Управляйте сервером прямо из Telegram-чата"</p>
                </div>

                <div class="panel">
                    <div class="panel-header">
                        <div class="window-dots">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                        </div>
                        <span class="panel-title">"@tg_deploy_bot — команды"</span>
                        <span class="panel-badge">
                            <span class="pulse-dot"></span>
                            {format!("{} ДОСТУПНО", BOT_COMMANDS.len())}
                        </span>
                    </div>

                    <div class="panel-body">
                        <div class="panel-command">"Доступные команды:"</div>
                        <div class="command-list">
                            {BOT_COMMANDS.iter().map(|command| view! {
                                <CommandRow command=*command />
                            }).collect::<Vec<_>>()}
                        </div>

                        <div class="panel-footer">
                            <div class="panel-hints">
                                <div class="muted">"Примеры:"</div>
                                {BOT_COMMAND_EXAMPLES.iter().map(|example| view! {
                                    <div>{*example}</div>
                                }).collect::<Vec<_>>()}
                            </div>
                            <div class="panel-stats">
                                <span class="stat"><span class="dot green"></span>{format!("{} команд", BOT_COMMANDS.len())}</span>
                                <span class="stat"><span class="dot blue"></span>"Telegram Bot API"</span>
                                <span class="stat"><span class="pulse-dot"></span>"Webhook / Polling"</span>
                            </div>
                        </div>
                    </div>
                </div>

                <p class="section-note">
                    <span class="accent">"*"</span>
                    " Команды всегда доступны - Бот работает 24/7 - Уведомления мгновенно"
                </p>
            </div>
        </section>
    }
}

#[component]
fn CommandRow(command: BotCommand) -> impl IntoView {
    view! {
        <div class="command-row">
            <div class="command-main">
                <span class="command-id">{format!("[{}]", command.id)}</span>
                <span class="command-status">{command.status}</span>
                <span class="command-name">{command.name}</span>
                <span class="command-args">{format!("({})", command.args)}</span>
            </div>
            <div class="command-hint">"отправить боту"</div>
        </div>
    }
}
