use crate::core::normalize::normalize;
use crate::models::{DescriptionOptions, SkillLevel};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescribeError {
    #[error("Skill name is required")]
    EmptySkill,
}

/// Level-specific texts for one template skill
struct LevelTemplates {
    beginner: &'static str,
    intermediate: &'static str,
    advanced: &'static str,
}

impl LevelTemplates {
    fn for_level(&self, level: SkillLevel) -> &'static str {
        match level {
            SkillLevel::Beginner => self.beginner,
            SkillLevel::Intermediate => self.intermediate,
            SkillLevel::Advanced => self.advanced,
        }
    }
}

static SKILL_TEMPLATES: &[(&str, LevelTemplates)] = &[
    (
        "react",
        LevelTemplates {
            beginner: "Solid foundation in React development with understanding of components, props, and basic hooks. Comfortable building simple user interfaces and familiar with JSX syntax. Currently learning about state management and component lifecycle. Eager to expand knowledge in React ecosystem and modern development practices.",
            intermediate: "Competent React developer with experience building interactive web applications using hooks, context API, and component composition. Skilled in managing application state, handling forms, and implementing routing with React Router. Familiar with popular libraries and comfortable with debugging React applications.",
            advanced: "Expert-level React development skills encompassing modern hooks, component lifecycle management, and advanced state management patterns. Proficient in building scalable single-page applications with optimal performance through code splitting, lazy loading, and memoization. Deep experience with React ecosystem including Redux Toolkit, React Query, and comprehensive testing with React Testing Library.",
        },
    ),
    (
        "nodejs",
        LevelTemplates {
            beginner: "Basic Node.js knowledge with understanding of JavaScript runtime environment and npm package management. Familiar with creating simple servers using Express.js and working with file systems. Learning about asynchronous programming and callback patterns. Ready to build foundational backend skills.",
            intermediate: "Solid Node.js backend development skills including RESTful API creation, middleware implementation, and database integration with MongoDB or PostgreSQL. Comfortable with Express.js framework, authentication systems, and error handling. Experience with npm ecosystem and basic deployment practices.",
            advanced: "Comprehensive Node.js backend development expertise including scalable API design, microservices architecture, and advanced database optimization. Expert in Express.js, middleware development, authentication/authorization systems, and performance optimization. Proficient with containerization, testing frameworks, and production deployment strategies.",
        },
    ),
    (
        "python",
        LevelTemplates {
            beginner: "Foundational Python programming skills with understanding of syntax, data types, control structures, and basic object-oriented programming. Familiar with popular libraries like requests and pandas for simple data manipulation. Comfortable with Python development environment and package management using pip.",
            intermediate: "Competent Python developer with experience in web development using Django or Flask, data analysis with pandas and NumPy, and automation scripting. Skilled in object-oriented programming, exception handling, and working with APIs. Familiar with virtual environments and testing frameworks.",
            advanced: "Advanced Python expertise spanning web development with Django/Flask, data science with pandas/NumPy/scikit-learn, and automation solutions. Expert in object-oriented and functional programming paradigms, async programming with asyncio, and performance optimization. Extensive experience with testing, debugging, and deploying Python applications at scale.",
        },
    ),
    (
        "javascript",
        LevelTemplates {
            beginner: "Basic JavaScript knowledge including variables, functions, loops, and DOM manipulation. Understanding of ES6 fundamentals like arrow functions and template literals. Comfortable with browser developer tools and debugging simple JavaScript applications. Building foundation in modern JavaScript development.",
            intermediate: "Solid JavaScript proficiency including ES6+ features, asynchronous programming with promises and async/await, and modern browser APIs. Experience with popular frameworks and libraries, comfortable with module systems and bundling tools. Skilled in debugging and optimizing JavaScript applications.",
            advanced: "Expert JavaScript developer with deep understanding of language fundamentals, advanced ES6+ features, and performance optimization techniques. Proficient in multiple frameworks, testing methodologies, and build tools. Extensive experience with TypeScript, advanced async patterns, and modern JavaScript ecosystem.",
        },
    ),
    (
        "design",
        LevelTemplates {
            beginner: "Basic UI/UX design skills with understanding of design principles, color theory, and typography. Familiar with design tools like Figma or Adobe XD for creating simple wireframes and mockups. Learning about user experience fundamentals and responsive design concepts.",
            intermediate: "Competent UI/UX designer with experience creating user-centered designs, wireframes, and prototypes. Skilled in design systems, accessibility principles, and user research methodologies. Proficient with industry-standard tools and comfortable collaborating with development teams.",
            advanced: "Professional UI/UX design expertise with comprehensive skills in user research, information architecture, and interaction design. Master of design tools including Figma, Adobe Creative Suite, and prototyping platforms. Expert in design systems, accessibility standards, and cross-platform design strategies.",
        },
    ),
];

fn opening_phrase(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Beginner => "Building foundational skills",
        SkillLevel::Intermediate => "Developing competency",
        SkillLevel::Advanced => "Expert-level proficiency",
    }
}

/// Generate a skill description for the requested experience level
///
/// Skills matching one of the built-in templates (by containment in either
/// direction) get that template's text, followed by any custom context.
/// Anything else gets a generic paragraph built around the skill name.
pub fn generate_description(
    skill_name: &str,
    options: &DescriptionOptions,
) -> Result<String, DescribeError> {
    let normalized = normalize(skill_name);
    if normalized.is_empty() {
        return Err(DescribeError::EmptySkill);
    }

    let level = options.experience_level;

    let template = SKILL_TEMPLATES
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()));

    if let Some((key, templates)) = template {
        tracing::trace!("Using {} template for skill {:?}", key, skill_name);

        let mut description = templates.for_level(level).to_string();
        if let Some(context) = options.custom_context.as_deref().filter(|c| !c.is_empty()) {
            description.push(' ');
            description.push_str(context);
        }
        return Ok(description);
    }

    let skill_name = skill_name.trim();
    let tools = if options.include_tools {
        " Familiar with industry-standard tools and best practices."
    } else {
        ""
    };
    let certifications = if options.include_certifications {
        " Holds relevant certifications and continues professional development."
    } else {
        ""
    };

    Ok(format!(
        "{} in {} with hands-on experience applying modern methodologies and industry best practices. \
         Demonstrated ability to deliver high-quality results through systematic approach and continuous learning.\
         {}{} Strong problem-solving capabilities with attention to detail and commitment to staying current \
         with emerging trends in the {} domain. Experience collaborating effectively with cross-functional teams \
         and sharing knowledge with others.",
        opening_phrase(level),
        skill_name,
        tools,
        certifications,
        skill_name
    ))
}
