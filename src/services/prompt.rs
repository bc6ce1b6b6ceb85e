use crate::models::survey::SurveyAnswers;

/// Builds the idea-generation prompt. The wording is load-bearing: the
/// front-end renders the completion as-is, so the format section is what
/// keeps responses readable.
pub fn build_prompt(answers: &SurveyAnswers) -> String {
    format!(
        r#"You are an expert in crafting innovative, tech-forward business concepts for a modern audience (particularly millennials and Gen Z).

The user has provided the following information:

1. Interests/Passions: {interests}
2. Skills/Strengths: {skills}
3. Lifestyle/Work Preferences: {lifestyle}
4. Main Goal or Ambition: {goal}
5. Tech/Digital Preferences: {tech}
6. Additional Constraints or “Dream Business” Details: {constraints}

**Task**:
Generate five fresh, creative business ideas that align with the user’s inputs. Each idea should be innovative and modern—favoring digital-first or tech-savvy approaches where appropriate.

**Required Format** for each idea:

1. **Idea Title**
2. **Overview (1–3 sentences)**
3. **Key Steps** (at least two)

**Guidelines**:

- Each idea must feel relevant to the user’s interests, skills, and lifestyle.
- If the user has a specific ambition (side hustle, low initial budget), tailor suggestions accordingly.
- Avoid overly generic suggestions like “open a coffee shop.” Focus on tech-forward, digital-friendly, or creative models.
- Incorporate the user’s personality or brand vibe where possible (e.g., remote, flexible hours).
- Aim for originality and creativity—avoid clichés or well-known templates. Keep each idea moderately feasible while still pushing the envelope.

Now, propose **5** distinct ideas in a structured list (1 through 5)."#,
        interests = answers.interests,
        skills = answers.skills,
        lifestyle = answers.lifestyle,
        goal = answers.goal,
        tech = answers.tech,
        constraints = answers.constraints,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_all_six_values_in_slot_order() {
        let answers = SurveyAnswers {
            interests: "Baking".into(),
            skills: "Organizing".into(),
            lifestyle: "Remote".into(),
            goal: "Extra income".into(),
            tech: "Mobile-first".into(),
            constraints: "Under $500".into(),
        };
        let prompt = build_prompt(&answers);

        let positions: Vec<usize> = [
            "1. Interests/Passions: Baking",
            "2. Skills/Strengths: Organizing",
            "3. Lifestyle/Work Preferences: Remote",
            "4. Main Goal or Ambition: Extra income",
            "5. Tech/Digital Preferences: Mobile-first",
            "6. Additional Constraints or “Dream Business” Details: Under $500",
        ]
        .iter()
        .map(|line| prompt.find(line).expect("slot line missing from prompt"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_slots_keep_the_template_intact() {
        let prompt = build_prompt(&SurveyAnswers::default());
        assert!(prompt.contains("1. Interests/Passions: \n"));
        assert!(prompt.contains("propose **5** distinct ideas"));
    }
}
