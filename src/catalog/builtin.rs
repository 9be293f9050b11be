use crate::models::{FeatureRecord, IconRef, Inline, RichText};

/// Features shown on the landing page, in display order.
pub const FEATURE_LIST: [FeatureRecord; 3] = [
    FeatureRecord::new(
        "Build Fast",
        IconRef::new("undraw_docusaurus_mountain.svg"),
        RichText::new(&[Inline::Text(
            "Refract's minimalist API and simple core concepts let you write component logic \
             quickly, getting features built without a steep learning curve..",
        )]),
    ),
    FeatureRecord::new(
        "Stay Focused",
        IconRef::new("undraw_docusaurus_tree.svg"),
        RichText::new(&[Inline::Text(
            "The isolated lens provided to each component allows you to manage local state and \
             effects without worrying about the rest of your application.",
        )]),
    ),
    FeatureRecord::new(
        "Code Less",
        IconRef::new("undraw_docusaurus_react.svg"),
        RichText::new(&[Inline::Text(
            "The declarative, reactive system automatically updates the UI for you, eliminating \
             the need for manual DOM manipulation and reducing boilerplate code.",
        )]),
    ),
];
