// Narrative analysis prompt templates.

pub const NARRATIVE_SYSTEM: &str = "\
You are an experienced HR business partner who assesses employees on a 9-box talent grid. \
Judge performance from demonstrated results and potential from growth signals. \
Base every judgement on the review text only; do not invent facts. \
You MUST respond with a single valid JSON object — no markdown fences, no explanations.";

pub const NARRATIVE_PROMPT_TEMPLATE: &str = r#"Assess the employee described in the review below and propose a development plan.

EMPLOYEE: {employee_name}

REVIEW TEXT:
{review_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "performance": "low" | "medium" | "high",
  "potential": "low" | "medium" | "high",
  "reasoning": "string, 2-4 sentences citing the review",
  "confidence": number between 0 and 100,
  "strengths": ["string"],
  "developmentAreas": ["string"],
  "planTitle": "string",
  "objectives": ["string"],
  "actionItems": [
    {
      "description": "string",
      "skillArea": "string",
      "priority": "low" | "medium" | "high",
      "daysToComplete": number,
      "estimatedHours": number,
      "owner": "Employee" | "Manager" | "HR"
    }
  ],
  "successMetrics": ["string"],
  "timeline": "string, e.g. 90 days"
}

Propose between 4 and 6 action items."#;

pub fn build_narrative_prompt(employee_name: &str, review_text: &str) -> String {
    NARRATIVE_PROMPT_TEMPLATE
        .replace("{employee_name}", employee_name)
        .replace("{review_text}", review_text)
}
