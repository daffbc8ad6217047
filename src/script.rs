use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::carousel::Input;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: missing event after time")]
    MissingEvent { line: usize },
    #[error("line {line}: invalid time '{value}'")]
    InvalidTime { line: usize, value: String },
    #[error("line {line}: unknown event '{name}'")]
    UnknownEvent { line: usize, name: String },
    #[error("line {line}: event '{name}' expects a numeric argument")]
    InvalidArgument { line: usize, name: String },
    #[error("line {line}: unexpected trailing input '{rest}'")]
    TrailingInput { line: usize, rest: String },
    #[error("line {line}: time {at_ms} ms goes back before {previous_ms} ms")]
    TimeWentBack {
        line: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}

/// What happens at one point of a replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Input(Input),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptEvent {
    pub at: Duration,
    pub action: Action,
}

/// A timestamped list of page events, one per line:
///
/// ```text
/// # ms   event
/// 1200   next
/// 1300   indicator 2
/// 1400   touchstart 320
/// 1500   touchend 180
/// 9000   tick
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn last_time(&self) -> Duration {
        self.events.last().map(|event| event.at).unwrap_or_default()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut events = Vec::new();
        let mut previous = Duration::ZERO;

        for (number, raw) in source.lines().enumerate() {
            let line = number + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let event = parse_line(line, content)?;
            if event.at < previous {
                return Err(ScriptError::TimeWentBack {
                    line,
                    at_ms: event.at.as_millis() as u64,
                    previous_ms: previous.as_millis() as u64,
                });
            }
            previous = event.at;
            events.push(event);
        }

        Ok(Script { events })
    }
}

fn parse_line(line: usize, content: &str) -> Result<ScriptEvent, ScriptError> {
    let mut words = content.split_whitespace();

    let time = words.next().unwrap_or_default();
    let at_ms: u64 = time.parse().map_err(|_| ScriptError::InvalidTime {
        line,
        value: time.to_string(),
    })?;
    let name = words.next().ok_or(ScriptError::MissingEvent { line })?;

    let invalid = |name: &str| ScriptError::InvalidArgument {
        line,
        name: name.to_string(),
    };

    let action = match name.to_ascii_lowercase().as_str() {
        "next" => Action::Input(Input::NextClick),
        "prev" => Action::Input(Input::PrevClick),
        "enter" => Action::Input(Input::PointerEnter),
        "leave" => Action::Input(Input::PointerLeave),
        "tick" => Action::Tick,
        "indicator" => {
            let index = next_argument(&mut words, line, name)?
                .parse::<usize>()
                .map_err(|_| invalid(name))?;
            Action::Input(Input::IndicatorClick(index))
        }
        "touchstart" => {
            let x = parse_position(next_argument(&mut words, line, name)?)
                .ok_or_else(|| invalid(name))?;
            Action::Input(Input::TouchStart { x })
        }
        "touchend" => {
            let x = parse_position(next_argument(&mut words, line, name)?)
                .ok_or_else(|| invalid(name))?;
            Action::Input(Input::TouchEnd { x })
        }
        _ => {
            return Err(ScriptError::UnknownEvent {
                line,
                name: name.to_string(),
            });
        }
    };

    let rest: Vec<&str> = words.collect();
    if !rest.is_empty() {
        return Err(ScriptError::TrailingInput {
            line,
            rest: rest.join(" "),
        });
    }

    Ok(ScriptEvent {
        at: Duration::from_millis(at_ms),
        action,
    })
}

fn next_argument<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    line: usize,
    name: &str,
) -> Result<&'a str, ScriptError> {
    words.next().ok_or_else(|| ScriptError::InvalidArgument {
        line,
        name: name.to_string(),
    })
}

fn parse_position(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn parses_every_event_kind() {
        let script: Script = "
            # warm up
            0     enter
            100   leave     # back out
            1200  next
            1250  PREV
            1300  indicator 2
            1400  touchstart 320.5
            1500  touchend -12
            9000  tick
        "
        .parse()
        .expect("script should parse");

        let actions: Vec<Action> = script.events.iter().map(|event| event.action).collect();
        assert_eq!(
            actions,
            vec![
                Action::Input(Input::PointerEnter),
                Action::Input(Input::PointerLeave),
                Action::Input(Input::NextClick),
                Action::Input(Input::PrevClick),
                Action::Input(Input::IndicatorClick(2)),
                Action::Input(Input::TouchStart { x: 320.5 }),
                Action::Input(Input::TouchEnd { x: -12.0 }),
                Action::Tick,
            ]
        );
        assert_eq!(script.events[2].at, ms(1200));
        assert_eq!(script.last_time(), ms(9000));
    }

    #[test]
    fn empty_script_has_no_events() {
        let script: Script = "\n# nothing\n\n".parse().unwrap();

        assert!(script.events.is_empty());
        assert_eq!(script.last_time(), Duration::ZERO);
    }

    #[test]
    fn reports_line_numbers() {
        let error = "0 next\n\nsoon prev".parse::<Script>().unwrap_err();
        assert_eq!(
            error,
            ScriptError::InvalidTime {
                line: 3,
                value: "soon".to_string()
            }
        );
        assert_eq!(error.to_string(), "line 3: invalid time 'soon'");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            "10".parse::<Script>().unwrap_err(),
            ScriptError::MissingEvent { line: 1 }
        );
        assert_eq!(
            "10 jump".parse::<Script>().unwrap_err(),
            ScriptError::UnknownEvent {
                line: 1,
                name: "jump".to_string()
            }
        );
        assert_eq!(
            "10 indicator".parse::<Script>().unwrap_err(),
            ScriptError::InvalidArgument {
                line: 1,
                name: "indicator".to_string()
            }
        );
        assert_eq!(
            "10 touchend NaN".parse::<Script>().unwrap_err(),
            ScriptError::InvalidArgument {
                line: 1,
                name: "touchend".to_string()
            }
        );
        assert_eq!(
            "10 next now".parse::<Script>().unwrap_err(),
            ScriptError::TrailingInput {
                line: 1,
                rest: "now".to_string()
            }
        );
    }

    #[test]
    fn rejects_time_going_back() {
        let error = "500 next\n400 prev".parse::<Script>().unwrap_err();

        assert_eq!(
            error,
            ScriptError::TimeWentBack {
                line: 2,
                at_ms: 400,
                previous_ms: 500
            }
        );
    }
}
