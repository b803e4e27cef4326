pub const CONTACT_TEXT: &str = concat!(
    "\nCONTACT:\n\n",
    "Discord: <a href='https://discord.com/users/782012749693190176' target='_blank'>https://discord.com/users/782012749693190176</a>\n\n",
    "GitHub: <a href='https://github.com/g0ofycat' target='_blank'>https://github.com/g0ofycat</a>\n\n",
    "YouTube: <a href='https://www.youtube.com/channel/UC8YqlEzHti46V3A_Lz6inLQ' target='_blank'>https://www.youtube.com/channel/UC8YqlEzHti46V3A_Lz6inLQ</a>\n\n",
    "Twitter: <a href='https://x.com/g0ofycat' target='_blank'>https://x.com/g0ofycat</a>\n\n",
    "Email: <b>g0ofycatbusiness@gmail.com</b>\n\n",
);

crate::canned_command!(ContactCommand, "contact", "Get my contact links", CONTACT_TEXT);
