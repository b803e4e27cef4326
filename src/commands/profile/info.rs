pub const INFO_TEXT: &str = concat!(
    "\nINFO:\n\n",
    "Age: <b>15</b>\n\n",
    "Timezone: <b>EST</b>\n\n",
    "Region: <b>USA</b>\n\n",
    "Hiring Status: <a href='https://g0ofycat.github.io/AmIForHire/' target='_blank'>https://g0ofycat.github.io/AmIForHire/</a>\n\n",
);

crate::canned_command!(InfoCommand, "info", "Personal details", INFO_TEXT);
