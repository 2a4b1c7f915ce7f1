//! Seed organization used by unit tests.

use super::EmployeeNode;

impl EmployeeNode {
    pub(crate) fn new(id: &str, name: &str, title: &str, department: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            title: title.to_owned(),
            department: department.to_owned(),
            image_ref: None,
            email: format!("{id}@northwind.example"),
            phone: None,
            location: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_children(mut self, children: Vec<EmployeeNode>) -> Self {
        self.children = children;
        self
    }
}

/// `ceo -> coo -> vp1`, the smallest tree with a grandchild.
pub(crate) fn small_chain() -> EmployeeNode {
    EmployeeNode::new("ceo", "Dana Whitfield", "Chief Executive", "Executive").with_children(vec![
        EmployeeNode::new("coo", "Ravi Menon", "Chief Operating Officer", "Executive")
            .with_children(vec![EmployeeNode::new(
                "vp1",
                "Lena Ortiz",
                "VP of Operations",
                "Operations",
            )]),
    ])
}

pub(crate) fn northwind() -> EmployeeNode {
    let upstream = EmployeeNode::new(
        "vp-upstream",
        "Karim Haddad",
        "VP of Upstream Operations",
        "Upstream Operations",
    )
    .with_children(vec![
        EmployeeNode::new(
            "dir-reservoir",
            "Noor Salim",
            "Director of Reservoir Management",
            "Upstream Operations",
        )
        .with_children(vec![
            EmployeeNode::new(
                "senior-petroleum",
                "Tariq Bishara",
                "Senior Petroleum Engineer",
                "Upstream Operations",
            )
            .with_children(vec![
                EmployeeNode::new(
                    "reservoir-eng-1",
                    "Maya Rahal",
                    "Reservoir Engineer",
                    "Upstream Operations",
                ),
                EmployeeNode::new(
                    "production-eng-1",
                    "Omar Feld",
                    "Production Engineer",
                    "Production Operations",
                ),
            ]),
        ]),
        EmployeeNode::new(
            "dir-drilling",
            "Sami Kovac",
            "Director of Drilling Operations",
            "Drilling Operations",
        ),
    ]);

    let downstream = EmployeeNode::new(
        "vp-downstream",
        "Ines Varga",
        "VP of Downstream Operations",
        "Downstream Operations",
    )
    .with_children(vec![EmployeeNode::new(
        "dir-refining",
        "Jonas Eriksen",
        "Director of Refining",
        "Downstream Operations",
    )]);

    EmployeeNode::new("ceo", "Dana Whitfield", "President & CEO", "Executive").with_children(vec![
        EmployeeNode::new("coo", "Ravi Menon", "Executive VP & COO", "Executive")
            .with_children(vec![upstream, downstream]),
        EmployeeNode::new("cfo", "Helen Park", "Executive VP & CFO", "Finance").with_children(vec![
            EmployeeNode::new("vp-treasury", "Adil Nasser", "VP of Treasury", "Finance"),
        ]),
        EmployeeNode::new(
            "vp-technology",
            "Priya Anand",
            "Chief Technology Officer",
            "Technology & Innovation",
        )
        .with_children(vec![EmployeeNode::new(
            "dir-digital",
            "Leo Brandt",
            "Director of Digital Transformation",
            "Digital Transformation",
        )]),
        EmployeeNode::new(
            "vp-hr",
            "Grace Okafor",
            "VP of Human Resources",
            "Human Resources",
        ),
    ])
}
