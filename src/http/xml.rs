//! Legacy XML rendering of the multi-day document.
//!
//! Mirrors the JSON structure as attribute-bearing elements: one
//! `<location>` holding a `<time>` element per day. Absent events are
//! emitted as empty elements without a `time` attribute, which is how the
//! legacy schema marked them.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::api::{DayEntry, MultiDayResponse, Properties, RiseSetDto, TransitDto};

pub fn render_multi_day(doc: &MultiDayResponse) -> anyhow::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("astrodata");
    root.push_attribute(("copyright", doc.copyright));
    root.push_attribute(("licenseurl", doc.license_url));
    writer.write_event(Event::Start(root))?;

    let mut location = BytesStart::new("location");
    location.push_attribute(("longitude", fmt(doc.geometry.coordinates[0]).as_str()));
    location.push_attribute(("latitude", fmt(doc.geometry.coordinates[1]).as_str()));
    location.push_attribute(("elevation", fmt(doc.geometry.coordinates[2]).as_str()));
    writer.write_event(Event::Start(location))?;

    for day in &doc.days {
        write_day(&mut writer, day)?;
    }

    writer.write_event(Event::End(BytesEnd::new("location")))?;
    writer.write_event(Event::End(BytesEnd::new("astrodata")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn fmt(value: f64) -> String {
    format!("{value:.2}")
}

fn write_day(writer: &mut Writer<Vec<u8>>, day: &DayEntry) -> anyhow::Result<()> {
    let mut time = BytesStart::new("time");
    time.push_attribute(("date", day.date.as_str()));
    writer.write_event(Event::Start(time))?;

    match &day.properties {
        Properties::Sun(sun) => {
            write_rise_set(writer, "sunrise", &sun.sunrise)?;
            write_rise_set(writer, "sunset", &sun.sunset)?;
            write_transit(writer, "solarnoon", &sun.solarnoon)?;
            write_transit(writer, "solarmidnight", &sun.solarmidnight)?;
        }
        Properties::Moon(moon) => {
            write_rise_set(writer, "moonrise", &moon.moonrise)?;
            write_rise_set(writer, "moonset", &moon.moonset)?;
            write_transit(writer, "high_moon", &moon.high_moon)?;
            write_transit(writer, "low_moon", &moon.low_moon)?;
            let mut phase = BytesStart::new("moonphase");
            phase.push_attribute(("value", fmt(moon.moonphase).as_str()));
            writer.write_event(Event::Empty(phase))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("time")))?;
    Ok(())
}

fn write_rise_set(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    event: &RiseSetDto,
) -> anyhow::Result<()> {
    let mut element = BytesStart::new(name);
    if let Some(time) = &event.time {
        element.push_attribute(("time", time.as_str()));
    }
    if let Some(azimuth) = event.azimuth {
        element.push_attribute(("azimuth", fmt(azimuth).as_str()));
    }
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn write_transit(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    event: &TransitDto,
) -> anyhow::Result<()> {
    let mut element = BytesStart::new(name);
    if let Some(time) = &event.time {
        element.push_attribute(("time", time.as_str()));
    }
    if let Some(altitude) = event.altitude {
        element.push_attribute(("altitude", fmt(altitude).as_str()));
    }
    if let Some(distance) = event.distance {
        element.push_attribute(("distance", fmt(distance).as_str()));
    }
    if let Some(visible) = event.visible {
        element.push_attribute(("visible", if visible { "true" } else { "false" }));
    }
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Geometry, SunProperties, When};

    fn sample() -> MultiDayResponse {
        MultiDayResponse {
            copyright: crate::api::COPYRIGHT,
            license_url: crate::api::LICENSE_URL,
            kind: "FeatureCollection",
            geometry: Geometry {
                kind: "Point",
                coordinates: [10.75, 59.91, 0.0],
            },
            days: vec![DayEntry {
                date: "2022-06-01".into(),
                when: When {
                    interval: ["2022-06-01T00:00+00:00".into(), "2022-06-02T00:00+00:00".into()],
                },
                properties: Properties::Sun(SunProperties {
                    body: "Sun",
                    sunrise: RiseSetDto {
                        time: Some("2022-06-01T03:49+00:00".into()),
                        azimuth: Some(44.51),
                    },
                    sunset: RiseSetDto {
                        time: None,
                        azimuth: None,
                    },
                    solarnoon: TransitDto {
                        time: Some("2022-06-01T11:55+00:00".into()),
                        altitude: Some(52.1),
                        distance: Some(151_700_000.0),
                        visible: Some(true),
                    },
                    solarmidnight: TransitDto {
                        time: None,
                        altitude: None,
                        distance: None,
                        visible: None,
                    },
                }),
            }],
        }
    }

    #[test]
    fn test_renders_structure_and_attributes() {
        let xml = render_multi_day(&sample()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<astrodata copyright=\"MET Norway\""));
        assert!(xml.contains("<location longitude=\"10.75\" latitude=\"59.91\""));
        assert!(xml.contains("<time date=\"2022-06-01\">"));
        assert!(xml.contains("<sunrise time=\"2022-06-01T03:49+00:00\" azimuth=\"44.51\"/>"));
        assert!(xml.contains("visible=\"true\""));
    }

    #[test]
    fn test_absent_event_is_bare_element() {
        let xml = render_multi_day(&sample()).unwrap();
        assert!(xml.contains("<sunset/>"));
        assert!(xml.contains("<solarmidnight/>"));
    }
}
