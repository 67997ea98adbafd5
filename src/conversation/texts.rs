//! Operator-facing reply texts
//!
//! Every terminal outcome yields exactly one human-readable message; internal
//! diagnostics never leak here.

use crate::models::{Company, Subscriber};

pub const GREETING: &str = "Привет! Выберите действие:";
pub const MAIN_MENU: &str = "Главное меню:";
pub const SUBSCRIBER_ACTIONS_MENU: &str = "Выберите действие с абонентом:";
pub const COMPANY_ACTIONS_MENU: &str = "Выберите действие с юридическим лицом:";
pub const UNKNOWN_COMMAND: &str = "Выберите действие из меню.";
pub const INTERNAL_ERROR: &str = "Произошла ошибка. Попробуйте ещё раз.";

pub const ASK_LAST_NAME: &str = "Введите фамилию Абонента:";
pub const ASK_FIRST_NAME: &str = "Введите имя Абонента:";
pub const ASK_PHONE: &str = "Введите телефон Абонента:";
pub const ASK_ADDRESS: &str = "Введите Адрес проживания Абонента:";
pub const SUBSCRIBER_ADDED: &str = "Абонент успешно добавлен!";
pub const SUBSCRIBER_PHONE_TAKEN: &str = "⚠️ Абонент с таким телефоном уже существует.";
pub const INVALID_PHONE: &str =
    "⚠️ Неверный формат номера телефона! Введите в формате: +7(999)999 99-99";

pub const ASK_SEARCH_PHONE: &str = "Введите номер телефона абонента:";
pub const SUBSCRIBER_NOT_FOUND: &str = "Абонент не найден.";
pub const NO_SUBSCRIBERS: &str = "У вас нет абонентов.";

pub const ASK_DELETE_PHONE: &str = "Введите номер телефона абонента для удаления:";
pub const SUBSCRIBER_DELETED: &str = "Абонент удален.";
pub const DELETE_PHONE_NOT_FOUND: &str = "Абонент с таким номером не найден.";

pub const ASK_NEW_FIRST_NAME: &str = "Введите новое имя абонента:";
pub const SUBSCRIBER_NAME_UPDATED: &str = "Имя абонента обновлено!";

pub const ASK_ASSIGN_INN: &str = "Введите ИНН юридического лица:";
pub const SUBSCRIBER_ASSIGNED: &str = "Абонент привязан к юридическому лицу!";
pub const COMPANY_NOT_FOUND_RETRY: &str = "Юридическое лицо не найдено. Попробуйте снова.";

pub const ASK_COMPANY_NAME: &str = "Введите название юридического лица:";
pub const ASK_COMPANY_TYPE: &str = "Введите тип юридического лица:";
pub const ASK_COMPANY_INN: &str = "Введите ИНН юридического лица:";
pub const COMPANY_ADDED: &str = "Юридическое лицо успешно добавлено!";
pub const COMPANY_INN_TAKEN: &str = "⚠️ Юридическое лицо с таким ИНН уже существует.";

pub const NO_COMPANIES: &str = "Юридических лиц нет.";
pub const COMPANY_NOT_FOUND: &str = "Юридическое лицо не найдено.";

pub const ASK_DELETE_INN: &str = "Введите ИНН юридического лица для удаления:";
pub const COMPANY_DELETED: &str = "Юридическое лицо удалено.";
pub const DELETE_INN_NOT_FOUND: &str = "Юридическое лицо с таким ИНН не найдено.";

pub const ASK_NEW_COMPANY_NAME: &str = "Введите новое название юридического лица:";
pub const COMPANY_NAME_UPDATED: &str = "Название юридического лица обновлено!";

/// One-message card for a subscriber, as shown in list and search results.
pub fn subscriber_card(subscriber: &Subscriber) -> String {
    format!(
        "{} {} - {}\nАдрес: {}",
        subscriber.last_name,
        subscriber.first_name,
        subscriber.phone,
        subscriber.address.as_deref().unwrap_or("Нет адреса")
    )
}

/// One-message card for a company.
pub fn company_card(company: &Company) -> String {
    format!(
        "{} ({})\nИНН: {}",
        company.name, company.company_type, company.inn
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_subscriber_card_without_address() {
        let subscriber = Subscriber {
            id: 1,
            last_name: "Иванов".to_string(),
            first_name: "Пётр".to_string(),
            phone: "+7(111)222 33-44".to_string(),
            address: None,
            operator_id: 1,
            company_id: None,
            created_at: Utc::now(),
        };

        assert_eq!(
            subscriber_card(&subscriber),
            "Иванов Пётр - +7(111)222 33-44\nАдрес: Нет адреса"
        );
    }

    #[test]
    fn test_company_card() {
        let company = Company {
            id: 1,
            name: "Ромашка".to_string(),
            company_type: "ООО".to_string(),
            inn: "7701234567".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(company_card(&company), "Ромашка (ООО)\nИНН: 7701234567");
    }
}
