use chrono::{
  DateTime,
  FixedOffset,
  Offset,
  Utc
};

pub const DEFAULT_TIME_FORMAT: &str =
  "%Y-%m-%d %H:%M";

/// Renders `ts` in the viewer's offset.
///
/// The format string has already been checked by
/// [`is_valid_time_format`]; an invalid pattern would make chrono's
/// `Display` panic.
pub fn format_in_offset(
  ts: DateTime<Utc>,
  offset: FixedOffset,
  format: &str
) -> String {
  ts.with_timezone(&offset)
    .format(format)
    .to_string()
}

pub fn is_valid_time_format(
  format: &str
) -> bool {
  use chrono::format::{
    Item,
    StrftimeItems
  };

  !format.trim().is_empty()
    && StrftimeItems::new(format)
      .all(|item| {
        !matches!(item, Item::Error)
      })
}

/// Converts the browser's `Date.getTimezoneOffset()` value (minutes *behind*
/// UTC) into a chrono offset. Out of range input maps to UTC.
pub fn offset_from_js_minutes(
  minutes_behind_utc: f64
) -> FixedOffset {
  let seconds =
    (-minutes_behind_utc * 60.0).round();
  if !seconds.is_finite() {
    return utc_offset();
  }

  FixedOffset::east_opt(seconds as i32)
    .unwrap_or_else(utc_offset)
}

pub fn utc_offset() -> FixedOffset {
  Utc.fix()
}

/// Serde adapter for `DateTime<Utc>` written as `2026-10-17T08:30:00.123Z`.
///
/// Reading accepts any RFC 3339 timestamp, so records written with other
/// precisions still load.
pub mod iso_millis_serde {
  use chrono::{
    DateTime,
    SecondsFormat,
    Utc
  };
  use serde::{
    Deserialize,
    Deserializer,
    Serializer
  };

  pub fn serialize<S>(
    dt: &DateTime<Utc>,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(
      &dt.to_rfc3339_opts(
        SecondsFormat::Millis,
        true
      )
    )
  }

  pub fn deserialize<'de, D>(
    deserializer: D
  ) -> Result<DateTime<Utc>, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw = String::deserialize(
      deserializer
    )?;
    DateTime::parse_from_rfc3339(&raw)
      .map(|dt| dt.with_timezone(&Utc))
      .map_err(serde::de::Error::custom)
  }

  pub mod option {
    use chrono::{
      DateTime,
      SecondsFormat,
      Utc
    };
    use serde::{
      Deserialize,
      Deserializer,
      Serializer
    };

    pub fn serialize<S>(
      dt: &Option<DateTime<Utc>>,
      serializer: S
    ) -> Result<S::Ok, S::Error>
    where
      S: Serializer
    {
      match dt {
        | Some(dt) => serializer
          .serialize_some(
            &dt.to_rfc3339_opts(
              SecondsFormat::Millis,
              true
            )
          ),
        | None => {
          serializer.serialize_none()
        }
      }
    }

    pub fn deserialize<'de, D>(
      deserializer: D
    ) -> Result<
      Option<DateTime<Utc>>,
      D::Error
    >
    where
      D: Deserializer<'de>
    {
      let raw =
        Option::<String>::deserialize(
          deserializer
        )?;
      raw
        .map(|raw| {
          DateTime::parse_from_rfc3339(
            &raw
          )
          .map(|dt| {
            dt.with_timezone(&Utc)
          })
          .map_err(
            serde::de::Error::custom
          )
        })
        .transpose()
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn formats_in_browser_offset() {
    let ts = Utc
      .with_ymd_and_hms(
        2026, 10, 17, 23, 30, 0
      )
      .single()
      .expect("valid timestamp");

    // UTC+2 reports -120 from getTimezoneOffset.
    let offset =
      offset_from_js_minutes(-120.0);
    assert_eq!(
      format_in_offset(
        ts,
        offset,
        DEFAULT_TIME_FORMAT
      ),
      "2026-10-18 01:30"
    );

    let west = offset_from_js_minutes(300.0);
    assert_eq!(
      format_in_offset(ts, west, "%H:%M"),
      "18:30"
    );
  }

  #[test]
  fn nonsense_offsets_fall_back_to_utc() {
    assert_eq!(
      offset_from_js_minutes(f64::NAN),
      utc_offset()
    );
    assert_eq!(
      offset_from_js_minutes(1.0e9),
      utc_offset()
    );
  }

  #[test]
  fn rejects_broken_format_strings() {
    assert!(is_valid_time_format(
      DEFAULT_TIME_FORMAT
    ));
    assert!(!is_valid_time_format("%H:%"));
    assert!(!is_valid_time_format("  "));
  }
}
