// LLM prompt constants for project-suggestion generation.

/// System prompt for project generation — enforces JSON-only output.
pub const PROJECTS_SYSTEM: &str =
    "You are a helpful career advisor that suggests coding projects. \
    You MUST respond with valid JSON only — a JSON array of project objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Project generation prompt template.
/// Replace: {role_name}, {user_skills}, {missing_skills}, {role_description}
pub const PROJECTS_PROMPT_TEMPLATE: &str = r#"You are a career advisor helping someone become a {role_name}.
The user currently has these skills: {user_skills}
They need to learn these skills: {missing_skills}
Their role description: {role_description}

Generate 5 project suggestions that will help them learn the missing skills while building their portfolio.
For each project, provide:
1. Project name (be specific and engaging)
2. Description (2-3 sentences explaining what the project does and what skills it teaches)
3. Skills it focuses on (from the missing skills list)
4. Difficulty level (beginner, intermediate, or advanced)

Return the response as a JSON array with this structure:
[
  {
    "name": "Project Name",
    "description": "Project description",
    "skills": ["skill1", "skill2"],
    "difficulty": "beginner"
  }
]"#;
