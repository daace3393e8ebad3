//! Page rendering. Handlers pick a [`View`] (template name plus its data) and
//! a [`Renderer`] turns it into a full HTML document.

use std::fmt::Write;

use canali_types::{Channel, FormError, Video};

use crate::{CHANNELS_PATH, NEW_CHANNEL_PATH, channel_path, new_video_path};

#[derive(Debug)]
pub enum View {
    ChannelList {
        channels: Vec<Channel>,
    },
    ChannelForm {
        error: Option<FormError>,
    },
    ChannelDetail {
        channel: Channel,
        videos: Vec<Video>,
    },
    VideoForm {
        channel: Channel,
        error: Option<FormError>,
    },
}

impl View {
    pub fn template_name(&self) -> &'static str {
        match self {
            View::ChannelList { .. } => "canali.html",
            View::ChannelForm { .. } => "canale_form.html",
            View::ChannelDetail { .. } => "video.html",
            View::VideoForm { .. } => "video_form.html",
        }
    }
}

pub trait Renderer: Send + Sync {
    fn render(&self, view: &View) -> anyhow::Result<String>;
}

/// Built-in templates, written straight to a `String`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, view: &View) -> anyhow::Result<String> {
        let mut body = String::new();
        let title = match view {
            View::ChannelList { channels } => {
                channel_list(&mut body, channels)?;
                "Canali".to_string()
            }
            View::ChannelForm { error } => {
                channel_form(&mut body, error.as_ref())?;
                "Nuovo canale".to_string()
            }
            View::ChannelDetail { channel, videos } => {
                channel_detail(&mut body, channel, videos)?;
                channel.name.clone()
            }
            View::VideoForm { channel, error } => {
                video_form(&mut body, channel, error.as_ref())?;
                format!("Nuovo video - {}", channel.name)
            }
        };
        Ok(layout(&title, &body))
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"it\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn error_box(out: &mut String, error: Option<&FormError>) -> std::fmt::Result {
    match error {
        Some(e) => writeln!(out, "<p class=\"error\">{}</p>", escape(&e.to_string())),
        None => Ok(()),
    }
}

fn channel_list(out: &mut String, channels: &[Channel]) -> std::fmt::Result {
    writeln!(out, "<h1>Canali</h1>")?;
    writeln!(out, "<p><a href=\"{}\">Nuovo canale</a></p>", NEW_CHANNEL_PATH)?;
    if channels.is_empty() {
        return writeln!(out, "<p>Nessun canale.</p>");
    }
    writeln!(out, "<ul>")?;
    for c in channels {
        writeln!(
            out,
            "<li><a href=\"{}\">{}</a> ({}) - {} iscritti</li>",
            channel_path(c.id),
            escape(&c.name),
            escape(&c.category),
            c.subscriber_count
        )?;
    }
    writeln!(out, "</ul>")
}

fn channel_form(out: &mut String, error: Option<&FormError>) -> std::fmt::Result {
    writeln!(out, "<h1>Nuovo canale</h1>")?;
    error_box(out, error)?;
    writeln!(out, "<form method=\"post\" action=\"{}\">", NEW_CHANNEL_PATH)?;
    writeln!(out, "<label>Nome <input name=\"nome\"></label>")?;
    writeln!(
        out,
        "<label>Numero iscritti <input name=\"numero_iscritti\" value=\"0\"></label>"
    )?;
    writeln!(out, "<label>Categoria <input name=\"categoria\"></label>")?;
    writeln!(out, "<button type=\"submit\">Salva</button>\n</form>")?;
    writeln!(out, "<p><a href=\"{}\">Torna ai canali</a></p>", CHANNELS_PATH)
}

fn channel_detail(out: &mut String, channel: &Channel, videos: &[Video]) -> std::fmt::Result {
    writeln!(out, "<h1>{}</h1>", escape(&channel.name))?;
    writeln!(
        out,
        "<p>{} - {} iscritti</p>",
        escape(&channel.category),
        channel.subscriber_count
    )?;
    writeln!(
        out,
        "<p><a href=\"{}\">Nuovo video</a></p>",
        new_video_path(channel.id)
    )?;
    if videos.is_empty() {
        writeln!(out, "<p>Nessun video.</p>")?;
    } else {
        writeln!(out, "<ul>")?;
        for v in videos {
            write!(out, "<li>")?;
            if let Some(thumbnail) = &v.thumbnail {
                write!(out, "<img src=\"{}\" alt=\"\"> ", escape(thumbnail))?;
            }
            writeln!(out, "{} ({} s)</li>", escape(&v.title), v.duration)?;
        }
        writeln!(out, "</ul>")?;
    }
    writeln!(out, "<p><a href=\"{}\">Torna ai canali</a></p>", CHANNELS_PATH)
}

fn video_form(out: &mut String, channel: &Channel, error: Option<&FormError>) -> std::fmt::Result {
    writeln!(out, "<h1>Nuovo video per {}</h1>", escape(&channel.name))?;
    error_box(out, error)?;
    writeln!(
        out,
        "<form method=\"post\" action=\"{}\">",
        new_video_path(channel.id)
    )?;
    writeln!(out, "<label>Titolo <input name=\"titolo\"></label>")?;
    writeln!(out, "<label>Durata (secondi) <input name=\"durata\"></label>")?;
    writeln!(out, "<label>Immagine <input name=\"immagine\"></label>")?;
    writeln!(out, "<button type=\"submit\">Salva</button>\n</form>")?;
    writeln!(
        out,
        "<p><a href=\"{}\">Torna al canale</a></p>",
        channel_path(channel.id)
    )
}

/// Escapes text for both element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
