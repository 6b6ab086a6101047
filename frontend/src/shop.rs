// Contact details that show up on the page. The WhatsApp number lives in `booking::message`
// since that's where the link gets built.

pub const ADDRESS_LINES: &[&str] = &["18 Queen Street South", "Kitchener, ON", "N2G 1V6"];
pub const PHONE: &str = "519-954-9333";
pub const EMAIL: &str = "info@velvethandlebear.com";
pub const FACEBOOK: &str = "https://www.facebook.com/velvethandlebear/";
pub const INSTAGRAM: &str = "https://www.instagram.com/velvethandlebear/";

pub const MAP_SEARCH: &str = "https://www.google.com/maps/search/?api=1&query=18+Queen+Street+South+Kitchener+ON+N2G+1V6";
pub const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2896.5!2d-80.4928!3d43.4516!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x882bf3e2c5b5b5b5%3A0x5b5b5b5b5b5b5b5b!2s18%20Queen%20St%20S%2C%20Kitchener%2C%20ON%20N2G%201V6!5e0!3m2!1sen!2sca!4v1234567890123!5m2!1sen!2sca";

pub const HERO_IMAGE: &str = "https://ext.same-assets.com/3767174725/765384817.jpeg";

// Everything below is served from the asset dir; see assets/README.md for the list to deploy
pub const TEAM: &[(&str, &str)] = &[
	("Mitch", "/assets/team1.webp"),
	("Miguel", "/assets/team2.webp"),
	("Tim", "/assets/team3.webp"),
	("JP", "/assets/team4.webp"),
];

// (src, alt), laid out in four columns of three
pub const GALLERY: &[(&str, &str)] = &[
	("/assets/gallery1.webp", "Barber giving haircut"),
	("/assets/gallery2.webp", "Barber cutting hair"),
	("/assets/gallery3.webp", "Haircut in progress"),
	("/assets/gallery4.webp", "Team photo"),
	("/assets/gallery5.webp", "Barber detail"),
	("/assets/gallery6.webp", "Barber with client"),
	("/assets/gallery7.webp", "Barber working"),
	("/assets/gallery8.webp", "Barber portrait"),
	("/assets/gallery9.webp", "Barber tools"),
	("/assets/gallery10.webp", "Barber detail work"),
	("/assets/gallery1.webp", "Barber shaving"),
	("/assets/gallery2.webp", "Barbershop interior"),
];
