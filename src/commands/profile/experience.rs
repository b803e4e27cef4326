pub const EXPERIENCE_TEXT: &str = concat!(
    "\nEXPERIENCE:\n\n",
    "- <b>5 Years of Programming</b>\n\n",
    "- <b>2 Years UI/UX</b>\n\n",
    "- <b>2 Years Building</b>\n\n",
    "- <b>2 Years Animating</b>\n\n",
);

crate::canned_command!(
    ExperienceCommand,
    "experience",
    "See how long I've been working for",
    EXPERIENCE_TEXT
);
