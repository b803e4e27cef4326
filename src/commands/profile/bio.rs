pub const BIO_TEXT: &str = concat!(
    "\nBIO:\n\n",
    "Hello, I'm g0ofycat! I'm a Fullstack Developer and Web Designer with over 5 years of experience.\n\n",
    "My main language is Python, and I also work with Luau, HTML, CSS, JavaScript / TypeScript, C, and C++.\n\n",
    "I am currently exploring Machine Learning, AI, and NLP (Natural Language Processing).\n\n",
    "I specialize in areas such as Mechanics / Systems, UI/UX design, and many other projects among other fields!\n",
    "    ",
);

crate::canned_command!(BioCommand, "bio", "About me", BIO_TEXT);
