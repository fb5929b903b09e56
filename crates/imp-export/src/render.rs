use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::{BlankFormContext, ResultsContext};

pub const RESULTS_TEMPLATE_NAME: &str = "results.md";
pub const BLANK_FORM_TEMPLATE_NAME: &str = "blank_form.md";

/// Built-in results report (Jinja2 syntax, Markdown output).
pub const RESULTS_TEMPLATE: &str = r#"# {{ instrument }} results report

- **Patient ID:** {{ patient.patient_id }}
- **Evaluation date:** {{ patient.evaluation_date }}
- **Age (weeks):** {% if patient.age_weeks %}{{ patient.age_weeks }}{% else %}-{% endif %}
- **Evaluator:** {{ patient.evaluator }}

## Results by skill type

| Skill | Score | Percentage | Maximum |
|---|---|---|---|
{% for row in type_rows -%}
| {{ row.label }} ({{ row.code }}) | {{ row.total }} | {{ row.percentage_label }} | {{ row.max }} |
{% endfor -%}
| **{{ type_total.label }}** | {{ type_total.total }} | {{ type_total.percentage_label }} | {{ type_total.max }} |

## Results by section

| Section | Total |
|---|---|
{% for row in section_rows -%}
| {{ row.title }} | {{ row.total }} |
{% endfor %}
## {{ type_chart.title }}

{{ type_chart.subtitle }}

| Skill | Percentage | |
|---|---|---|
{% for p in type_chart.points -%}
| {{ p.label }} | {{ p.value_label }} | {{ p.bar }} |
{% endfor %}
## {{ section_chart.title }}

| Section | Percentage | |
|---|---|---|
{% for p in section_chart.points -%}
| {{ p.label }} | {{ p.value_label }} | {{ p.bar }} |
{% endfor %}
## Interpretation

Total score: **{{ total_score }}** of {{ max_possible }}.

{{ interpretation }}

Percentile: {{ percentile }}

## Response detail
{% for section in responses %}
### {{ section.title }}
{% for r in section.responses %}
- {{ r.number }}. {{ r.title }} [{{ r.skill }}]: {{ r.value }} - {{ r.answer }}
{%- endfor %}
{% endfor %}
{%- if observations %}
## Observations
{% for o in observations %}
- **{{ o.title }}:** {{ o.value }}
{%- endfor %}
{% endif %}
---

Report date: {{ generated_on }}
"#;

/// Built-in blank evaluation form.
pub const BLANK_FORM_TEMPLATE: &str = r#"# {{ instrument }} evaluation form

- Patient ID: ______________________
- Evaluation date: ______________________
- Age (weeks): ______________________
- Evaluator: ______________________
{% for section in sections %}
## {{ section.title }}
{% for item in section.items %}
**{{ item.number }}. {{ item.title }}** [{{ item.skill }}]{% if item.provoked %} (provoked){% endif %}
{% for opt in item.options %}
- [{{ opt.value }}] {{ opt.text }}
{%- endfor %}
{% endfor %}
{%- endfor %}
---

## Additional observations

Quantity of movement: {% for q in movement_quantities %}[ ] {{ q }} {% endfor %}
{% for field in note_fields %}
{{ field }}:

__________________________________________________
__________________________________________________
{% endfor %}
Form generated: {{ generated_on }}
"#;

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
pub fn render_template<C: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &C,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

pub fn render_results(context: &ResultsContext) -> Result<String, ExportError> {
    tracing::info!(patient_id = %context.patient.patient_id, "rendering results report");
    render_template(RESULTS_TEMPLATE_NAME, RESULTS_TEMPLATE, context)
}

pub fn render_blank_form(context: &BlankFormContext) -> Result<String, ExportError> {
    render_template(BLANK_FORM_TEMPLATE_NAME, BLANK_FORM_TEMPLATE, context)
}
