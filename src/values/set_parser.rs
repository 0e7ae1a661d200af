//! `--set` overlay parsing.
//!
//! An expression is a comma-separated list of `key=value` pairs written into
//! a values mapping:
//!
//! - `a.b.c=1` creates nested mappings
//! - `hosts[1]=x` sets a list element, padding the list with nulls
//! - `ports={80,443}` sets a list
//! - `true`, `false`, `null` and integer literals are typed; the rest are strings
//! - `\` escapes the following character, e.g. `a\.b=1` or `list=x\,y`

use crate::shared::error::ResError;
use serde_yaml_ng::{Mapping, Value};

/// Largest list index accepted in `name[i]`
const MAX_INDEX: usize = 65_536;

/// Applies one `--set` expression to `base`.
///
/// # Errors
/// `ResError::SetParseError` for a key without a value, an empty key, an
/// unterminated index or list, or an invalid index.
pub fn parse_set(expression: &str, base: &mut Mapping) -> Result<(), ResError> {
    let mut parser = SetParser {
        chars: expression.chars().collect(),
        position: 0,
    };

    parser
        .parse_into(base)
        .map_err(|reason| ResError::SetParseError {
            expression: expression.to_string(),
            reason,
        })
}

struct SetParser {
    chars: Vec<char>,
    position: usize,
}

impl SetParser {
    fn parse_into(&mut self, data: &mut Mapping) -> Result<(), String> {
        while self.position < self.chars.len() {
            self.key(data)?;
        }
        Ok(())
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Reads up to the first unescaped stop character, consuming it
    fn read_until(&mut self, stops: &[char]) -> (String, Option<char>) {
        let mut text = String::new();
        while let Some(c) = self.next() {
            if c == '\\' {
                text.push(self.next().unwrap_or('\\'));
            } else if stops.contains(&c) {
                return (text, Some(c));
            } else {
                text.push(c);
            }
        }
        (text, None)
    }

    fn key(&mut self, data: &mut Mapping) -> Result<(), String> {
        let (key, stop) = self.read_until(&['=', '[', '.', ',']);

        match stop {
            None if key.is_empty() => Ok(()),
            None | Some(',') => Err(format!("key {:?} has no value", key)),
            Some(_) if key.is_empty() => Err("key is empty".to_string()),
            Some('=') => {
                let value = self.value()?;
                data.insert(Value::String(key), value);
                Ok(())
            }
            Some('.') => {
                let mut inner = match data.get_mut(key.as_str()) {
                    Some(slot) => into_mapping(std::mem::replace(slot, Value::Null)),
                    None => Mapping::new(),
                };
                let result = self.key(&mut inner);
                data.insert(Value::String(key), Value::Mapping(inner));
                result
            }
            Some(_) => {
                let mut list = match data.get_mut(key.as_str()) {
                    Some(slot) => into_sequence(std::mem::replace(slot, Value::Null)),
                    None => Vec::new(),
                };
                let result = self.list_entry(&mut list);
                data.insert(Value::String(key), Value::Sequence(list));
                result
            }
        }
    }

    /// Handles the remainder of `name[i]...` once `[` has been consumed
    fn list_entry(&mut self, list: &mut Vec<Value>) -> Result<(), String> {
        let (raw, stop) = self.read_until(&[']']);
        if stop.is_none() {
            return Err(format!("unterminated list index [{}", raw));
        }
        let index: usize = raw
            .trim()
            .parse()
            .map_err(|_| format!("invalid list index {:?}", raw))?;
        if index > MAX_INDEX {
            return Err(format!("list index {} exceeds the maximum of {}", index, MAX_INDEX));
        }
        if list.len() <= index {
            list.resize(index + 1, Value::Null);
        }

        match self.next() {
            Some('=') => {
                list[index] = self.value()?;
                Ok(())
            }
            Some('.') => {
                let mut inner = into_mapping(std::mem::replace(&mut list[index], Value::Null));
                let result = self.key(&mut inner);
                list[index] = Value::Mapping(inner);
                result
            }
            Some('[') => {
                let mut nested = into_sequence(std::mem::replace(&mut list[index], Value::Null));
                let result = self.list_entry(&mut nested);
                list[index] = Value::Sequence(nested);
                result
            }
            Some(c) => Err(format!("unexpected {:?} after list index [{}]", c, index)),
            None => Err(format!("list index [{}] has no value", index)),
        }
    }

    /// Reads a value after `=`, consuming the trailing `,` if any
    fn value(&mut self) -> Result<Value, String> {
        if self.peek() != Some('{') {
            let (raw, _) = self.read_until(&[',']);
            return Ok(typed_value(&raw));
        }

        self.position += 1;
        let mut items = Vec::new();
        loop {
            let (raw, stop) = self.read_until(&[',', '}']);
            match stop {
                Some(',') => items.push(typed_value(&raw)),
                Some(_) => {
                    if !(raw.is_empty() && items.is_empty()) {
                        items.push(typed_value(&raw));
                    }
                    break;
                }
                None => return Err("list value is missing a closing '}'".to_string()),
            }
        }

        match self.next() {
            None | Some(',') => Ok(Value::Sequence(items)),
            Some(c) => Err(format!("unexpected {:?} after list value", c)),
        }
    }
}

fn into_mapping(value: Value) -> Mapping {
    match value {
        Value::Mapping(mapping) => mapping,
        _ => Mapping::new(),
    }
}

fn into_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Sequence(items) => items,
        _ => Vec::new(),
    }
}

/// `true`/`false`/`null` (any case) and integers without a leading zero are
/// typed; everything else stays a string.
fn typed_value(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if raw.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if raw == "0" {
        return Value::Number(0_i64.into());
    }
    if !raw.starts_with('0') {
        if let Ok(number) = raw.parse::<i64>() {
            return Value::Number(number.into());
        }
    }
    Value::String(raw.to_string())
}
