//- SecureVigil detail page. The code panels are reading material for a
//- separate project; the text is escaped into `<pre><code>` and nothing here
//- runs it.

use std::fmt::Write;

use super::icon;
use crate::data::{SECUREVIGIL_ARCHITECTURE, SECUREVIGIL_FEATURES, SECUREVIGIL_SNIPPETS, SECUREVIGIL_STRUCTURE};
use crate::dataobjects::CodeSnippet;
use crate::markup::{escape, Markup};

const BADGES: [&str; 4] = ["Production-Ready", "Flask Dashboard", "Azure Deployable", "CI/CD Pipeline"];

const STACK: [(&str, [&str; 3]); 4] = [
    ("Core", ["Python 3.11", "Flask 3.0", "SQLite 3"]),
    ("Security", ["python-nmap", "CVSS scoring", "TLS/SSL"]),
    ("Reporting", ["ReportLab", "Chart.js", "SMTP"]),
    ("DevOps", ["Docker", "Azure DevOps", "Pytest"]),
];

const OUTCOMES: [(&str, &str); 6] = [
    ("Automated Vulnerability Detection", "Reduced manual scanning time from 4 hours to 15 minutes per network segment"),
    ("Executive Reporting", "Generated management-ready PDF reports with risk prioritization"),
    ("Historical Trend Analysis", "Tracked vulnerability trends over time with SQLite persistence"),
    ("Real-time Alerting", "Automatic email notifications for high-risk vulnerabilities"),
    ("Cloud Deployment", "Production deployment on Azure with 99.9% uptime"),
    ("CI/CD Pipeline", "Automated testing and deployment with Azure DevOps"),
];

const QUICK_START: [(&str, &[&str]); 4] = [
    ("1. Clone Repository", &["git clone https://github.com/olaribigbeamodu/securevigil.git", "cd securevigil"]),
    ("2. Install Dependencies", &["pip install -r requirements.txt"]),
    ("3. Run Application", &["python app.py"]),
    ("4. Docker Deployment", &["docker build -t securevigil .", "docker run -p 5000:5000 securevigil"]),
];

const CONSIDERATIONS: [&str; 4] = [
    "Always obtain proper authorization before scanning any network",
    "Use environment variables for sensitive credentials (never hardcode)",
    "Implement rate limiting and authentication in production deployments",
    "Follow responsible disclosure practices for discovered vulnerabilities",
];

const ENHANCEMENTS: [(&str, [&str; 4]); 2] = [
    ("Phase 2", [
        "Integration with CVE databases (NVD, MITRE)",
        "Machine learning for vulnerability prediction",
        "Multi-tenant support",
        "REST API for integration",
    ]),
    ("Phase 3", [
        "Automated remediation workflows",
        "Integration with SIEM systems",
        "Compliance reporting (PCI-DSS, NIST)",
        "Mobile dashboard application",
    ]),
];

fn open_card(markup: &mut Markup, class: &str, heading: &str) {
    let _ = write!(markup, "<section class=\"card {}\">", class);
    markup.element("h2", "section-title", heading);
}

/// Tab strip plus one panel per snippet; the first panel starts open
fn render_snippets(markup: &mut Markup, snippets: &[CodeSnippet]) {
    open_card(markup, "implementation", "\u{1f4bb} Implementation");

    markup.raw("<nav class=\"tabs\">");
    for snippet in snippets {
        let _ = write!(markup, "<a href=\"#tab-{}\" class=\"tab\">{}</a>", snippet.key, escape(snippet.label));
    }
    markup.raw("</nav>");

    for (index, snippet) in snippets.iter().enumerate() {
        let open = if index == 0 { " open" } else { "" };
        let _ = write!(
            markup,
            "<details id=\"tab-{}\" class=\"snippet\" data-entry=\"{}\"{}><summary>{}<span class=\"file-name\">{}</span></summary>",
            snippet.key,
            index,
            open,
            icon(snippet.icon),
            escape(snippet.file_name)
        );
        let _ = write!(markup, "<pre class=\"code\"><code>{}</code></pre></details>", escape(snippet.source));
    }

    markup.raw("</section>");
}

pub(crate) fn render() -> String {
    let mut markup = Markup::new();
    markup.raw("<div class=\"page page-securevigil\">");

    let _ = write!(markup, "<header class=\"page-header\"><div class=\"hero-icon\">{}</div>", icon("shield"));
    markup.element("h1", "page-title", "SecureVigil");
    markup.element("p", "page-lead", "Enterprise Vulnerability Scanner with Executive Risk Reporting");
    markup.raw("<div class=\"badges\">");
    for badge in BADGES.iter() {
        markup.element("span", "badge", badge);
    }
    markup.raw("</div></header>");

    open_card(&mut markup, "problem", "\u{1f3af} Business Problem");
    markup.element(
        "p",
        "",
        "Many SMEs and educational institutions lack automated internal vulnerability visibility. \
         Security teams need fast internal scans, clear vulnerability summaries, risk scoring, \
         and executive-friendly reports.",
    );
    markup.element(
        "p",
        "emphasis",
        "SecureVigil automates vulnerability scanning and generates management-ready reports \
         with historical trend analysis and real-time alerting.",
    );
    markup.raw("</section>");

    open_card(&mut markup, "architecture", "\u{1f3d7} System Architecture");
    let _ = write!(markup, "<pre class=\"diagram\">{}</pre></section>", escape(SECUREVIGIL_ARCHITECTURE));

    markup.raw("<div class=\"card-grid features\">");
    for feature in SECUREVIGIL_FEATURES.iter() {
        let _ = write!(markup, "<div class=\"card feature\">{}", icon(feature.icon));
        markup.element("h3", "card-title", &feature.title);
        markup.element("p", "card-text", &feature.blurb);
        markup.raw("</div>");
    }
    markup.raw("</div>");

    render_snippets(&mut markup, &SECUREVIGIL_SNIPPETS);

    open_card(&mut markup, "structure", "\u{1f4c1} Project Structure");
    let _ = write!(markup, "<pre class=\"tree\">{}</pre></section>", escape(SECUREVIGIL_STRUCTURE));

    open_card(&mut markup, "stack", "\u{1f6e0} Technical Stack");
    markup.raw("<div class=\"stack-grid\">");
    for (group, items) in STACK.iter() {
        markup.raw("<div>");
        markup.element("h3", "", group);
        markup.list("bullets", items.iter());
        markup.raw("</div>");
    }
    markup.raw("</div></section>");

    open_card(&mut markup, "outcomes", "\u{1f4ca} Key Outcomes & Metrics");
    markup.raw("<div class=\"outcome-grid\">");
    for (title, text) in OUTCOMES.iter() {
        let _ = write!(markup, "<div class=\"outcome\">{}<div>", icon("check-circle"));
        markup.element("h3", "", title);
        markup.element("p", "", text);
        markup.raw("</div></div>");
    }
    markup.raw("</div></section>");

    open_card(&mut markup, "quick-start", "\u{1f680} Quick Start");
    for (step, commands) in QUICK_START.iter() {
        markup.raw("<div class=\"step\">");
        markup.element("h3", "", step);
        let commands: Vec<String> = commands.iter().map(|c| escape(c).into_owned()).collect();
        let _ = write!(markup, "<pre class=\"terminal\">{}</pre></div>", commands.join("\n"));
    }
    markup.raw("</section>");

    open_card(&mut markup, "considerations", "\u{26a0}\u{fe0f} Security Considerations");
    markup.raw("<ul class=\"bullets\"><li>This tool is designed for <strong>authorized internal lab environments only</strong></li>");
    for item in CONSIDERATIONS.iter() {
        markup.element("li", "", item);
    }
    markup.raw("</ul></section>");

    open_card(&mut markup, "enhancements", "\u{1f52e} Future Enhancements");
    markup.raw("<div class=\"stack-grid\">");
    for (phase, items) in ENHANCEMENTS.iter() {
        markup.raw("<div>");
        markup.element("h3", "", phase);
        markup.list("bullets", items.iter());
        markup.raw("</div>");
    }
    markup.raw("</div></section>");

    let _ = write!(
        markup,
        "<div class=\"actions\"><a href=\"https://github.com/olaribigbeamodu/securevigil\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"button button-primary\">{}View on GitHub</a>\
         <a href=\"#\" class=\"button button-outline\">{}Live Demo</a></div>",
        icon("code"),
        icon("terminal")
    );

    markup.raw("</div>");
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_panels_are_escaped_and_scanner_opens_first() -> () {
        let html = render();
        assert_eq!(html.matches("class=\"snippet\"").count(), SECUREVIGIL_SNIPPETS.len());
        assert!(html.contains("<details id=\"tab-scanner\" class=\"snippet\" data-entry=\"0\" open>"));
        assert!(html.contains("<details id=\"tab-risk\" class=\"snippet\" data-entry=\"1\"><summary>"));
        // the dashboard snippet contains raw `<scan_id>` route syntax
        assert!(html.contains("/report/&lt;scan_id&gt;"));
        assert!(!html.contains("/report/<scan_id>"));
    }

    #[test]
    fn sections_present() -> () {
        let html = render();
        for heading in ["Business Problem", "System Architecture", "Project Structure", "Quick Start", "Future Enhancements"].iter() {
            assert!(html.contains(heading), "missing {}", heading);
        }
        assert!(html.contains("docker run -p 5000:5000 securevigil"));
    }
}
