use super::*;

pub(crate) fn calendar_date(timestamp: &str) -> &str {
  timestamp.get(..10).unwrap_or(timestamp)
}

/// A rectangle of `width` x `height` content cells plus a one-cell border,
/// centered in `area` and shrunk to fit it.
pub(crate) fn centered_area(area: Rect, width: usize, height: usize) -> Rect {
  let fit = |wanted: usize, available: u16| {
    u16::try_from(wanted.saturating_add(2))
      .unwrap_or(u16::MAX)
      .clamp(1, available.max(1))
      .min(available)
  };

  let (width, height) = (fit(width, area.width), fit(height, area.height));

  Rect::new(
    area.x + (area.width - width) / 2,
    area.y + (area.height - height) / 2,
    width,
    height,
  )
}

pub(crate) fn host_name(url: &str) -> &str {
  let host = if url.contains("://") {
    url.split('/').nth(2).unwrap_or_default()
  } else {
    url.split('/').next().unwrap_or_default()
  };

  host.strip_prefix("www.").unwrap_or(host)
}

pub(crate) fn plain_text(text: &str) -> String {
  let mut cleaned = String::with_capacity(text.len());
  let mut inside_tag = false;

  for ch in text.chars() {
    match ch {
      '<' => {
        inside_tag = true;
        cleaned.push(' ');
      }
      '>' if inside_tag => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ => cleaned.push(ch),
    }
  }

  let decoded = html_escape::decode_html_entities(&cleaned);

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}
