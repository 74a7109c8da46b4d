//! Static fixture catalog.
//!
//! Deals, photos, groups, and templates mirror the data the external CRM
//! would sync: three photo sessions with five photos each, a group forest
//! with one level of nesting, four message templates (two per channel),
//! and the singleton session user.

use std::collections::HashMap;

use chrono::NaiveDate;

use domain::models::deal::{Deal, DealDetails, DealSource, DealStatus};
use domain::models::notification::{NotificationChannel, NotificationTemplate};
use domain::models::photo::Photo;
use domain::models::photo_group::PhotoGroup;
use domain::models::user::{NotificationSettings, User};

const DEAL_DESCRIPTION: &str = "Профессиональная фотосессия с полной обработкой фотографий.";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}

fn full_url(base: u64, index: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=1200&h=800&fit=crop",
        base + index as u64
    )
}

fn thumb_url(base: u64, index: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=400&h=300&fit=crop",
        base + index as u64
    )
}

fn deal_photo_set(deal_id: &str, base: u64) -> Vec<Photo> {
    (1..=5)
        .map(|i| Photo {
            id: format!("photo-{}-{}", deal_id, i),
            url: full_url(base, i),
            thumbnail_url: thumb_url(base, i),
            shooting_date: None,
        })
        .collect()
}

fn group_photo_set(group_id: &str, base: u64, count: usize, shot_on: NaiveDate) -> Vec<Photo> {
    (1..=count)
        .map(|i| Photo {
            id: format!("{}-photo-{}", group_id, i),
            url: full_url(base, i),
            thumbnail_url: thumb_url(base, i),
            shooting_date: Some(shot_on),
        })
        .collect()
}

/// The three seeded photo sessions.
pub fn deals() -> Vec<DealDetails> {
    let records = [
        (
            "1",
            "Семейная фотосессия в студии",
            date(2024, 11, 15),
            DealStatus::Ready,
        ),
        (
            "2",
            "Свадебная съемка",
            date(2024, 11, 20),
            DealStatus::Processing,
        ),
        (
            "3",
            "Детская фотосессия",
            date(2024, 11, 10),
            DealStatus::Ready,
        ),
    ];

    records
        .into_iter()
        .map(|(id, title, date, status)| DealDetails {
            deal: Deal {
                id: id.to_string(),
                title: title.to_string(),
                date,
                status,
                source: DealSource::Bitrix,
                photos_count: 5,
            },
            description: Some(DEAL_DESCRIPTION.to_string()),
        })
        .collect()
}

/// Flat per-deal photo sets, five photos each.
pub fn deal_photos() -> HashMap<String, Vec<Photo>> {
    HashMap::from([
        ("1".to_string(), deal_photo_set("1", 1_511_285_560_000)),
        ("2".to_string(), deal_photo_set("2", 1_519_741_644_000)),
        ("3".to_string(), deal_photo_set("3", 1_503_454_537_000)),
    ])
}

/// The group forest across all deals.
///
/// Deal "2" carries the one observed nesting level: "group-2-3" is a child
/// of "group-2-1", which also owns photos of its own.
pub fn groups() -> Vec<PhotoGroup> {
    let records = [
        ("group-1-1", "1", "Студийные портреты", 1_511_285_560_001, 3, None),
        ("group-1-2", "1", "Семейные кадры", 1_511_285_560_003, 2, None),
        ("group-2-1", "2", "Церемония", 1_519_741_644_001, 4, None),
        ("group-2-2", "2", "Банкет", 1_519_741_644_003, 3, None),
        (
            "group-2-3",
            "2",
            "Выездная регистрация",
            1_519_741_644_004,
            2,
            Some("group-2-1"),
        ),
        ("group-3-1", "3", "Детские портреты", 1_503_454_537_001, 3, None),
    ];

    records
        .into_iter()
        .map(|(id, deal_id, name, cover_base, photos_count, parent_id)| PhotoGroup {
            id: id.to_string(),
            deal_id: deal_id.to_string(),
            name: name.to_string(),
            cover_url: thumb_url(cover_base, 0),
            photos_count,
            parent_id: parent_id.map(str::to_string),
        })
        .collect()
}

/// Per-group photo sets. Counts match each group's `photos_count` hint
/// except for "group-2-2", where the hint intentionally disagrees with the
/// stored photos (the hint is display data, never enforced).
pub fn group_photos() -> HashMap<String, Vec<Photo>> {
    let session_1 = date(2024, 11, 15);
    let session_2 = date(2024, 11, 20);
    let session_3 = date(2024, 11, 10);

    HashMap::from([
        (
            "group-1-1".to_string(),
            group_photo_set("group-1-1", 1_511_285_570_000, 3, session_1),
        ),
        (
            "group-1-2".to_string(),
            group_photo_set("group-1-2", 1_511_285_580_000, 2, session_1),
        ),
        (
            "group-2-1".to_string(),
            group_photo_set("group-2-1", 1_519_741_654_000, 4, session_2),
        ),
        (
            "group-2-2".to_string(),
            group_photo_set("group-2-2", 1_519_741_664_000, 2, session_2),
        ),
        (
            "group-2-3".to_string(),
            group_photo_set("group-2-3", 1_519_741_674_000, 2, session_2),
        ),
        (
            "group-3-1".to_string(),
            group_photo_set("group-3-1", 1_503_454_547_000, 3, session_3),
        ),
    ])
}

/// The notification template catalog, two templates per channel.
pub fn templates() -> Vec<NotificationTemplate> {
    let records = [
        (
            "1",
            "Готовы предварительные фото",
            NotificationChannel::Sms,
            "Здравствуйте, {Имя}! Ваши предварительные фотографии с фотосессии {Дата_фотосессии} готовы к просмотру.",
        ),
        (
            "2",
            "Готов окончательный альбом",
            NotificationChannel::Sms,
            "Добрый день, {Имя}! Окончательный альбом с вашей фотосессии готов. Приглашаем вас для получения.",
        ),
        (
            "3",
            "Готовы предварительные фото (WhatsApp)",
            NotificationChannel::Whatsapp,
            "Здравствуйте, {Имя}! 📸 Ваши предварительные фотографии с фотосессии {Дата_фотосессии} готовы к просмотру!",
        ),
        (
            "4",
            "Готов окончательный альбом (WhatsApp)",
            NotificationChannel::Whatsapp,
            "Добрый день, {Имя}! ✨ Окончательный альбом с вашей фотосессии готов. Приглашаем вас для получения.",
        ),
    ];

    records
        .into_iter()
        .map(|(id, name, channel, text)| NotificationTemplate {
            id: id.to_string(),
            name: name.to_string(),
            channel,
            text: text.to_string(),
        })
        .collect()
}

/// The singleton session user.
pub fn user() -> User {
    User {
        id: "1".to_string(),
        name: "Иванов Иван Иванович".to_string(),
        phone: "+7 (999) 123-45-67".to_string(),
        email: "ivanov@example.com".to_string(),
        notification_settings: NotificationSettings {
            sms_enabled: true,
            whatsapp_enabled: true,
        },
    }
}
