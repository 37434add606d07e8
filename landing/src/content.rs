//! Static copy shared by the landing and docs pages.
//!
//! Everything here is fixed at build time. Views only ever borrow these
//! tables; nothing in the site mutates them.

/// One scripted command of the hero terminal and the lines it "prints".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSequence {
    pub command: &'static str,
    pub outputs: &'static [&'static str],
}

/// The four sessions the hero terminal cycles through, in order.
pub const TERMINAL_SEQUENCES: [CommandSequence; 4] = [
    CommandSequence {
        command: "/deploy main → production",
        outputs: &[
            "🤖 TelegramDeploy получил команду...",
            "📦 Клонирование репозитория...",
            "🔨 Сборка образа Docker...",
            "✅ Деплой успешно завершён!",
        ],
    },
    CommandSequence {
        command: "/status my-app",
        outputs: &[
            "🔍 Проверка статуса сервиса...",
            "💚 my-app: RUNNING (uptime 99.9%)",
            "📊 CPU: 12% | RAM: 256MB",
            "✅ Всё работает стабильно!",
        ],
    },
    CommandSequence {
        command: "/rollback my-app --to=v2.3.1",
        outputs: &[
            "⏪ Откат к версии v2.3.1...",
            "📦 Загрузка образа v2.3.1...",
            "🔄 Перезапуск контейнеров...",
            "✅ Откат выполнен успешно!",
        ],
    },
    CommandSequence {
        command: "/logs my-app --tail=50",
        outputs: &[
            "📋 Получение последних логов...",
            "[INFO] Server started on :8080",
            "[INFO] Connected to database",
            "✅ Готово — 50 строк получено!",
        ],
    },
];

/// Row of the `tg-deploy --list-integrations` panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integration {
    pub name: &'static str,
    pub status: &'static str,
    pub description: &'static str,
}

pub const INTEGRATIONS: [Integration; 6] = [
    Integration { name: "docker", status: "v", description: "Контейнеры" },
    Integration { name: "github-actions", status: "v", description: "CI/CD Pipeline" },
    Integration { name: "gitlab-ci", status: "v", description: "GitLab CI" },
    Integration { name: "kubernetes", status: "v", description: "K8s кластеры" },
    Integration { name: "nginx / caddy", status: "v", description: "Веб-серверы" },
    Integration { name: "systemd", status: "v", description: "Linux сервисы" },
];

/// Row of the bot commands panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotCommand {
    pub id: &'static str,
    pub name: &'static str,
    pub args: &'static str,
    pub status: &'static str,
}

pub const BOT_COMMANDS: [BotCommand; 6] = [
    BotCommand { id: "1", name: "/deploy", args: "branch → env", status: "✓" },
    BotCommand { id: "2", name: "/status", args: "service-name", status: "✓" },
    BotCommand { id: "3", name: "/rollback", args: "service --to=v1.0", status: "✓" },
    BotCommand { id: "4", name: "/logs", args: "service --tail=100", status: "✓" },
    BotCommand { id: "5", name: "/restart", args: "service-name", status: "✓" },
    BotCommand { id: "6", name: "/list", args: "все сервисы", status: "✓" },
];

/// Example invocations listed under the bot commands panel
pub const BOT_COMMAND_EXAMPLES: [&str; 3] = [
    "/deploy main → production",
    "/rollback api-service --to=v2.3.1",
    "/logs frontend --tail=50",
];

/// Entry of a docs sidebar section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: &'static str,
    pub title: &'static str,
}

/// Docs sidebar group: a clickable heading plus its items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    pub id: &'static str,
    pub title: &'static str,
    pub glyph: &'static str,
    pub items: &'static [SidebarItem],
}

pub const SIDEBAR_SECTIONS: [SidebarSection; 5] = [
    SidebarSection {
        id: "getting-started",
        title: "Начало работы",
        glyph: "[>]",
        items: &[
            SidebarItem { id: "installation", title: "Установка" },
            SidebarItem { id: "quick-start", title: "Быстрый старт" },
            SidebarItem { id: "configuration", title: "Конфигурация" },
        ],
    },
    SidebarSection {
        id: "commands",
        title: "Команды",
        glyph: "[$]",
        items: &[
            SidebarItem { id: "init", title: "flux init" },
            SidebarItem { id: "generate", title: "flux generate" },
            SidebarItem { id: "review", title: "flux review" },
            SidebarItem { id: "deploy", title: "flux deploy" },
        ],
    },
    SidebarSection {
        id: "models",
        title: "AI-модели",
        glyph: "[*]",
        items: &[
            SidebarItem { id: "model-selection", title: "Выбор модели" },
            SidebarItem { id: "custom-models", title: "Свои модели" },
            SidebarItem { id: "model-config", title: "Настройка моделей" },
        ],
    },
    SidebarSection {
        id: "integrations",
        title: "Интеграции",
        glyph: "[~]",
        items: &[
            SidebarItem { id: "ide-setup", title: "Настройка IDE" },
            SidebarItem { id: "cicd", title: "CI/CD интеграция" },
            SidebarItem { id: "custom-agents", title: "Свои агенты" },
        ],
    },
    SidebarSection {
        id: "api",
        title: "Справочник API",
        glyph: "[#]",
        items: &[
            SidebarItem { id: "cli-api", title: "CLI API" },
            SidebarItem { id: "config-api", title: "Configuration API" },
            SidebarItem { id: "plugin-api", title: "Plugin API" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_sequence_has_four_outputs() {
        for sequence in TERMINAL_SEQUENCES {
            assert!(sequence.command.starts_with('/'));
            assert_eq!(sequence.outputs.len(), 4, "{}", sequence.command);
        }
    }

    #[test]
    fn terminal_sequences_finish_with_success_line() {
        for sequence in TERMINAL_SEQUENCES {
            let last = sequence.outputs.last().copied().unwrap_or_default();
            assert!(last.starts_with('✅'), "{last}");
        }
    }

    #[test]
    fn sidebar_ids_are_unique() {
        let mut seen = HashSet::new();
        for section in SIDEBAR_SECTIONS {
            assert!(seen.insert(section.id), "duplicate id {}", section.id);
            for item in section.items {
                assert!(seen.insert(item.id), "duplicate id {}", item.id);
            }
        }
        assert_eq!(seen.len(), 21);
    }

    #[test]
    fn bot_commands_are_numbered_in_order() {
        let ids: Vec<_> = BOT_COMMANDS.iter().map(|c| c.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }
}
