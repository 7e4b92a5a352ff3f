use std::collections::BTreeMap;

use serde_json::{Number, Value};

use panel_logging::{panel_debug, panel_warn};

use crate::view_model::PanelViewModel;
use crate::{
    preview_data_url, CorrectionRequest, CorrectionResult, SelectedFile, ERROR_PREFIX,
    SUCCESS_PREFIX,
};

pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelState {
    image_url: String,
    output_url: String,
    selected_file: Option<SelectedFile>,
    before_preview: Option<String>,
    after_preview: Option<String>,
    result_text: String,
    next_submission_id: SubmissionId,
    /// In-flight submissions and the destination URL each one captured.
    pending: BTreeMap<SubmissionId, String>,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            phase: self.phase(),
            image_url: self.image_url.clone(),
            output_url: self.output_url.clone(),
            selected_file_name: self.selected_file.as_ref().map(|file| file.name.clone()),
            before_preview: self.before_preview.clone(),
            after_preview: self.after_preview.clone(),
            result_text: self.result_text.clone(),
            in_flight: self.pending.len(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        if self.pending.is_empty() {
            PanelPhase::Idle
        } else {
            PanelPhase::Submitting
        }
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    /// Returns whether a render is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_image_url(&mut self, value: String) {
        if self.image_url != value {
            self.image_url = value;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_output_url(&mut self, value: String) {
        if self.output_url != value {
            self.output_url = value;
            self.mark_dirty();
        }
    }

    /// Replaces the held file wholesale and refreshes the "before" preview.
    pub(crate) fn select_file(&mut self, file: SelectedFile) {
        panel_debug!("Selected file name={} bytes={}", file.name, file.bytes.len());
        self.before_preview = Some(preview_data_url(&file));
        self.selected_file = Some(file);
        self.mark_dirty();
    }

    /// A held file takes precedence over the URL field.
    pub(crate) fn build_request(&self) -> CorrectionRequest {
        match &self.selected_file {
            Some(file) => CorrectionRequest::Multipart {
                file: file.clone(),
                output_url: self.output_url.clone(),
            },
            None => CorrectionRequest::Json {
                image_url: self.image_url.clone(),
                output_url: self.output_url.clone(),
            },
        }
    }

    pub(crate) fn begin_submission(&mut self, output_url: String) -> SubmissionId {
        self.next_submission_id += 1;
        let id = self.next_submission_id;
        self.pending.insert(id, output_url);
        self.mark_dirty();
        id
    }

    pub(crate) fn finish_success(&mut self, id: SubmissionId, result: CorrectionResult) {
        let Some(output_url) = self.pending.remove(&id) else {
            panel_warn!("Ignoring completion for unknown submission {}", id);
            return;
        };
        let params = stringify_params(&result.adjustments.unwrap_or(Value::Null));
        self.result_text = format!("{SUCCESS_PREFIX}{params}");
        self.after_preview = Some(output_url);
        self.mark_dirty();
    }

    pub(crate) fn finish_failure(&mut self, id: SubmissionId, error: String) {
        if self.pending.remove(&id).is_none() {
            panel_warn!("Ignoring failure for unknown submission {}", id);
            return;
        }
        self.result_text = format!("{ERROR_PREFIX}{error}");
        self.mark_dirty();
    }
}

/// Compact JSON where integral floats print without a fraction (`1.0` as `1`),
/// matching how a browser stringifies the same value.
fn stringify_params(value: &Value) -> String {
    normalize_numbers(value).to_string()
}

// Beyond 2^53 integral floats are no longer exact, keep them as floats.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(number) if number.is_f64() => match number.as_f64() {
            Some(float)
                if float.is_finite() && float.fract() == 0.0 && float.abs() <= MAX_EXACT_INTEGER =>
            {
                Value::Number(Number::from(float as i64))
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), normalize_numbers(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::stringify_params;

    #[test]
    fn integral_floats_lose_their_fraction() {
        assert_eq!(stringify_params(&json!([1.0, -0.0, 50.0, 2.5])), "[1,0,50,2.5]");
    }

    #[test]
    fn huge_floats_are_left_alone() {
        assert_eq!(stringify_params(&json!(1e300)), "1e300");
    }

    #[test]
    fn strings_and_integers_pass_through() {
        assert_eq!(stringify_params(&json!({"a": "1.0", "b": 7})), r#"{"a":"1.0","b":7}"#);
    }
}
