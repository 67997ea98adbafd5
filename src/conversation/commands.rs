//! Menu command vocabulary
//!
//! The fixed set of button captions the controller recognizes while an
//! operator is idle. The captions themselves are presentation strings shown
//! on the reply keyboards; the controller only ever matches their
//! trimmed values. While a flow is active the vocabulary is not consulted,
//! except for the universal cancel commands.

pub const LIST_SUBSCRIBERS: &str = "📋 Список абонентов";
pub const SEARCH_SUBSCRIBER: &str = "🔍 Поиск абонента";
pub const SUBSCRIBER_ACTIONS: &str = "👤 Действия с абонентами";
pub const COMPANY_ACTIONS: &str = "🏢 Действия с юридическими лицами";
pub const RESTART: &str = "🔄 Перезапуск";

pub const ADD_SUBSCRIBER: &str = "➕ Добавить абонента";
pub const EDIT_SUBSCRIBER: &str = "✏ Изменить абонента";
pub const ASSIGN_TO_COMPANY: &str = "🏢 Добавить в юр. лицо";
pub const DELETE_SUBSCRIBER: &str = "❌ Удалить абонента";

pub const ADD_COMPANY: &str = "➕ Добавить юр. лицо";
pub const EDIT_COMPANY: &str = "✏ Изменить юр. лицо";
pub const DELETE_COMPANY: &str = "❌ Удалить юр. лицо";
pub const LIST_COMPANIES: &str = "📋 Список юр. лиц";

pub const BACK: &str = "🔙 Назад";

/// A recognized menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ListSubscribers,
    SearchSubscriber,
    SubscriberActions,
    CompanyActions,
    AddSubscriber,
    EditSubscriber,
    DeleteSubscriber,
    AssignToCompany,
    AddCompany,
    EditCompany,
    DeleteCompany,
    ListCompanies,
    Back,
    Restart,
}

impl MenuCommand {
    /// Match incoming text against the vocabulary, tolerating surrounding
    /// whitespace. Returns `None` for anything that is not a known caption.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            LIST_SUBSCRIBERS => Some(Self::ListSubscribers),
            SEARCH_SUBSCRIBER => Some(Self::SearchSubscriber),
            SUBSCRIBER_ACTIONS => Some(Self::SubscriberActions),
            COMPANY_ACTIONS => Some(Self::CompanyActions),
            ADD_SUBSCRIBER => Some(Self::AddSubscriber),
            EDIT_SUBSCRIBER => Some(Self::EditSubscriber),
            DELETE_SUBSCRIBER => Some(Self::DeleteSubscriber),
            ASSIGN_TO_COMPANY => Some(Self::AssignToCompany),
            ADD_COMPANY => Some(Self::AddCompany),
            EDIT_COMPANY => Some(Self::EditCompany),
            DELETE_COMPANY => Some(Self::DeleteCompany),
            LIST_COMPANIES => Some(Self::ListCompanies),
            BACK => Some(Self::Back),
            RESTART => Some(Self::Restart),
            _ => None,
        }
    }

    /// Whether the command cancels an in-progress flow. These are the only
    /// vocabulary entries reachable mid-flow.
    pub fn is_cancel(&self) -> bool {
        matches!(self, Self::Back | Self::Restart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_exact_captions() {
        assert_eq!(
            MenuCommand::parse("📋 Список абонентов"),
            Some(MenuCommand::ListSubscribers)
        );
        assert_eq!(MenuCommand::parse("🔙 Назад"), Some(MenuCommand::Back));
    }

    #[test]
    fn test_parses_with_surrounding_whitespace() {
        assert_eq!(
            MenuCommand::parse("  📋 Список юр. лиц \n"),
            Some(MenuCommand::ListCompanies)
        );
    }

    #[test]
    fn test_rejects_unknown_text() {
        assert_eq!(MenuCommand::parse("Иванов"), None);
        assert_eq!(MenuCommand::parse(""), None);
        assert_eq!(MenuCommand::parse("Назад"), None);
    }

    #[test]
    fn test_cancel_commands() {
        assert!(MenuCommand::Back.is_cancel());
        assert!(MenuCommand::Restart.is_cancel());
        assert!(!MenuCommand::AddSubscriber.is_cancel());
    }
}
