use serde::Deserialize;
use thiserror::Error;

use crate::models::{NewChannel, NewVideo};

/// A rejected form submission. The `Display` text is shown to the user
/// above the re-rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Nome obbligatorio.")]
    NameRequired,
    #[error("Categoria obbligatoria.")]
    CategoryRequired,
    #[error("Numero iscritti non valido.")]
    InvalidSubscriberCount,
    #[error("Titolo obbligatorio.")]
    TitleRequired,
    #[error("Durata obbligatoria.")]
    DurationRequired,
    #[error("Durata non valida.")]
    InvalidDuration,
}

// -- Channels --

/// Raw `POST /canali/nuovo` body. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ChannelForm {
    #[serde(default, rename = "nome")]
    pub name: String,
    #[serde(default, rename = "numero_iscritti")]
    pub subscriber_count: String,
    #[serde(default, rename = "categoria")]
    pub category: String,
}

impl ChannelForm {
    /// Checks name, then category, then subscriber count. The first failure wins.
    pub fn validate(&self) -> Result<NewChannel, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::CategoryRequired);
        }

        let subscriber_count = match self.subscriber_count.trim() {
            "" => 0,
            raw => raw
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= 0)
                .ok_or(FormError::InvalidSubscriberCount)?,
        };

        Ok(NewChannel {
            name: name.to_string(),
            subscriber_count,
            category: category.to_string(),
        })
    }
}

// -- Videos --

/// Raw `POST /canali/{id}/video/nuovo` body. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct VideoForm {
    #[serde(default, rename = "titolo")]
    pub title: String,
    #[serde(default, rename = "durata")]
    pub duration: String,
    #[serde(default, rename = "immagine")]
    pub thumbnail: String,
}

impl VideoForm {
    /// Checks title, then duration presence, then duration format.
    /// An empty thumbnail is stored as absent.
    pub fn validate(&self, channel_id: i64) -> Result<NewVideo, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }

        let duration = self.duration.trim();
        if duration.is_empty() {
            return Err(FormError::DurationRequired);
        }
        let duration = duration
            .parse::<i64>()
            .map_err(|_| FormError::InvalidDuration)?;

        let thumbnail = match self.thumbnail.trim() {
            "" => None,
            t => Some(t.to_string()),
        };

        Ok(NewVideo {
            channel_id,
            title: title.to_string(),
            duration,
            thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, subscribers: &str, category: &str) -> ChannelForm {
        ChannelForm {
            name: name.into(),
            subscriber_count: subscribers.into(),
            category: category.into(),
        }
    }

    fn video(title: &str, duration: &str, thumbnail: &str) -> VideoForm {
        VideoForm {
            title: title.into(),
            duration: duration.into(),
            thumbnail: thumbnail.into(),
        }
    }

    #[test]
    fn valid_channel_is_trimmed() {
        let new = channel("  Test ", " 100 ", " Tech\t").validate().unwrap();
        assert_eq!(
            new,
            NewChannel {
                name: "Test".into(),
                subscriber_count: 100,
                category: "Tech".into(),
            }
        );
    }

    #[test]
    fn empty_subscriber_count_defaults_to_zero() {
        assert_eq!(channel("A", "", "B").validate().unwrap().subscriber_count, 0);
        assert_eq!(channel("A", "   ", "B").validate().unwrap().subscriber_count, 0);

        let omitted = ChannelForm {
            name: "A".into(),
            category: "B".into(),
            ..Default::default()
        };
        assert_eq!(omitted.validate().unwrap().subscriber_count, 0);
    }

    #[test]
    fn blank_name_is_rejected_first() {
        assert_eq!(channel("   ", "abc", "").validate(), Err(FormError::NameRequired));
        assert_eq!(FormError::NameRequired.to_string(), "Nome obbligatorio.");
    }

    #[test]
    fn category_checked_before_subscriber_count() {
        assert_eq!(channel("A", "abc", " ").validate(), Err(FormError::CategoryRequired));
    }

    #[test]
    fn bad_subscriber_count_is_rejected() {
        for raw in ["abc", "1.5", "-3", "12x"] {
            assert_eq!(
                channel("A", raw, "B").validate(),
                Err(FormError::InvalidSubscriberCount),
                "input {raw:?}"
            );
        }
        assert_eq!(
            FormError::InvalidSubscriberCount.to_string(),
            "Numero iscritti non valido."
        );
    }

    #[test]
    fn valid_video_keeps_thumbnail() {
        let new = video(" Intro ", " 90 ", " thumb.png ").validate(7).unwrap();
        assert_eq!(
            new,
            NewVideo {
                channel_id: 7,
                title: "Intro".into(),
                duration: 90,
                thumbnail: Some("thumb.png".into()),
            }
        );
    }

    #[test]
    fn empty_thumbnail_becomes_none() {
        assert_eq!(video("A", "1", "").validate(1).unwrap().thumbnail, None);
        assert_eq!(video("A", "1", "  ").validate(1).unwrap().thumbnail, None);
    }

    #[test]
    fn video_checks_run_in_order() {
        assert_eq!(video(" ", "", "").validate(1), Err(FormError::TitleRequired));
        assert_eq!(video("A", " ", "").validate(1), Err(FormError::DurationRequired));
        assert_eq!(video("A", "ten", "").validate(1), Err(FormError::InvalidDuration));
        assert_eq!(FormError::TitleRequired.to_string(), "Titolo obbligatorio.");
        assert_eq!(FormError::InvalidDuration.to_string(), "Durata non valida.");
    }
}
