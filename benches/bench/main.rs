// third-party imports
use criterion::criterion_main;

const GROUP: &str = "wsub";
const ND: &str = ":"; // name delimiter

mod replace;
mod tokenize;

criterion_main!(replace::benches, tokenize::benches);

const SAMPLES: [(&str, &str); 3] = [
    ("short", "the cat sat on the mat."),
    (
        "prose",
        "Concatenation of cats, categories and bobcats: the catalogue lists every cat twice, \
         and the concatenated category of catfish stays outside of it.",
    ),
    (
        "code",
        "let category = cats.iter().map(|cat| cat.name()).collect::<Vec<_>>(); // concat(cat_list)",
    ),
];
