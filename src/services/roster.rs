use crate::models::Candidate;

/// Demonstration roster served when a request supplies none
pub fn demo_roster() -> Vec<Candidate> {
    vec![
        Candidate::new("101", "Sarah Chen", &["Node.js", "Python", "DevOps", "AWS"]),
        Candidate::new("102", "Michael Rodriguez", &["Digital Marketing", "SEO", "Content Strategy", "Analytics"]),
        Candidate::new("103", "Emily Johnson", &["Machine Learning", "Data Science", "Python", "TensorFlow"]),
        Candidate::new("104", "David Kim", &["Mobile Development", "React Native", "iOS", "Flutter"]),
        Candidate::new("105", "Lisa Wang", &["Graphic Design", "Brand Identity", "Adobe Creative Suite", "Web Design"]),
        Candidate::new("106", "Alex Thompson", &["DevOps", "Kubernetes", "Docker", "Cloud Architecture"]),
        Candidate::new("107", "Maria Garcia", &["Product Management", "Agile", "User Research", "Strategy"]),
        Candidate::new("108", "James Wilson", &["Cybersecurity", "Network Security", "Ethical Hacking", "Risk Assessment"]),
    ]
}
