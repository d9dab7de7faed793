//! Fixed liturgical texts.

use serde::Serialize;

/// Canticles said or sung in the offices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CanticleId {
    Venite,
    Jubilate,
    PaschaNostrum,
    TeDeum,
    BenedictusEsDomine,
    Benedictus,
    Magnificat,
    NuncDimittis,
}

impl CanticleId {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Venite => "Venite",
            Self::Jubilate => "Jubilate",
            Self::PaschaNostrum => "PASCHA NOSTRUM",
            Self::TeDeum => "TE DEUM LAUDAMUS",
            Self::BenedictusEsDomine => "BENEDICTUS ES, DOMINE",
            Self::Benedictus => "BENEDICTUS",
            Self::Magnificat => "MAGNIFICAT",
            Self::NuncDimittis => "NUNC DIMITTIS",
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self {
            Self::Venite => "O Come",
            Self::Jubilate => "Be Joyful",
            Self::PaschaNostrum => "Christ Our Passover",
            Self::TeDeum => "We Praise You, O God",
            Self::BenedictusEsDomine => "A Song of Praise",
            Self::Benedictus => "The Song of Zechariah",
            Self::Magnificat => "The Song of Mary",
            Self::NuncDimittis => "The Song of Simeon",
        }
    }

    /// Scripture source. Empty for the Te Deum.
    pub fn citation(&self, lenten: bool) -> &'static str {
        match self {
            Self::Venite if lenten => "PSALM 95",
            Self::Venite => "PSALM 95:1-7, 8-11",
            Self::Jubilate => "PSALM 100",
            Self::PaschaNostrum => "1 CORINTHIANS 5:7-8\nROMANS 6:9-11\n1 CORINTHIANS 15:20-22",
            Self::TeDeum => "",
            Self::BenedictusEsDomine => "SONG OF THE THREE YOUNG MEN, 29-34",
            Self::Benedictus => "LUKE 1:68-79",
            Self::Magnificat => "LUKE 1:46-55",
            Self::NuncDimittis => "LUKE 2:29-32",
        }
    }

    /// Canticle text. The Venite adds its closing verses in Lent.
    pub fn text(&self, lenten: bool) -> String {
        let body = match self {
            Self::Venite => VENITE,
            Self::Jubilate => JUBILATE,
            Self::PaschaNostrum => PASCHA_NOSTRUM,
            Self::TeDeum => TE_DEUM,
            Self::BenedictusEsDomine => BENEDICTUS_ES_DOMINE,
            Self::Benedictus => BENEDICTUS,
            Self::Magnificat => MAGNIFICAT,
            Self::NuncDimittis => NUNC_DIMITTIS,
        };
        match self {
            Self::Venite if lenten => format!("{body}\n{VENITE_LENTEN_VERSES}"),
            Self::PaschaNostrum | Self::TeDeum | Self::BenedictusEsDomine => body.to_string(),
            _ => format!("{body}\n{GLORIA_PATRI}"),
        }
    }
}

pub const STANDING: &str = "Officiant and People, all standing";

pub const ANTIPHON_RESPONSE: &str = "O come, let us adore him.";

pub const GLORIA_PATRI: &str = "Glory be to the Father, and to the Son, and to the Holy Spirit;\n\
as it was in the beginning, is now, and ever shall be, world without end. Amen.";

const VENITE: &str = "O come, let us sing unto the Lord; let us heartily rejoice in the strength of our salvation.\n\
Let us come before his presence with thanksgiving and show ourselves glad in him with psalms.\n\
For the Lord is a great God and a great King above all gods.\n\
In his hand are all the corners of the earth, and the heights of the hills are his also.\n\
The sea is his, for he made it, and his hands prepared the dry land.\n\
O come, let us worship and fall down and kneel before the Lord our Maker.\n\
For he is the Lord our God, and we are the people of his pasture and the sheep of his hand.";

const VENITE_LENTEN_VERSES: &str = "Today, if you will hear his voice, harden not your hearts as in the provocation, and as in the day of temptation in the wilderness,\n\
when your fathers tested me, proved me, and saw my works.\n\
Forty years long was I grieved with this generation, and said, \u{201c}It is a people that err in their hearts, for they have not known my ways,\u{201d}\n\
of whom I swore in my wrath that they should not enter into my rest.";

const JUBILATE: &str = "Be joyful in the Lord, all you lands; serve the Lord with gladness and come before his presence with a song.\n\
Know this: The Lord himself is God; he himself has made us, and we are his; we are his people and the sheep of his pasture.\n\
O go your way into his gates with thanksgiving and into his courts with praise; be thankful unto him and speak good of his Name.\n\
For the Lord is gracious; his mercy is everlasting, and his truth endures from generation to generation.";

const PASCHA_NOSTRUM: &str = "Alleluia. Christ our Passover has been sacrificed for us; therefore let us keep the feast,\n\
not with old leaven, the leaven of malice and evil, but with the unleavened bread of sincerity and truth. Alleluia.\n\
Christ being raised from the dead will never die again; death no longer has dominion over him.\n\
The death that he died, he died to sin, once for all; but the life he lives, he lives to God.\n\
So also consider yourselves dead to sin, and alive to God in Jesus Christ our Lord. Alleluia.\n\
Christ has been raised from the dead, the first fruits of those who have fallen asleep.\n\
For since by a man came death, by a man has come also the resurrection of the dead.\n\
For as in Adam all die, even so in Christ shall all be made alive. Alleluia.";

const TE_DEUM: &str = "We praise you, O God; we acclaim you as Lord;\n\
all creation worships you, the Father everlasting.\n\
To you all angels, all the powers of heaven, the cherubim and seraphim, sing in endless praise:\n\
Holy, holy, holy, Lord God of power and might, heaven and earth are full of your glory.\n\
The glorious company of apostles praise you.\n\
The noble fellowship of prophets praise you.\n\
The white-robed army of martyrs praise you.\n\
Throughout the world the holy Church acclaims you:\n\
Father, of majesty unbounded, your true and only Son, worthy of all praise, and the Holy Spirit, advocate and guide.\n\
You, Christ, are the king of glory, the eternal Son of the Father.\n\
When you took our flesh to set us free you humbly chose the Virgin\u{2019}s womb.\n\
You overcame the sting of death and opened the kingdom of heaven to all believers.\n\
You are seated at God\u{2019}s right hand in glory.\n\
We believe that you will come to be our judge.\n\
Come then, Lord, and help your people, bought with the price of your own blood,\n\
and bring us with your saints to glory everlasting.";

const BENEDICTUS_ES_DOMINE: &str = "Glory to you, Lord God of our fathers; you are worthy of praise; glory to you.\n\
Glory to you for the radiance of your holy Name; we will praise you and highly exalt you for ever.\n\
Glory to you in the splendor of your temple; on the throne of your majesty, glory to you.\n\
Glory to you, seated between the Cherubim; we will praise you and highly exalt you for ever.\n\
Glory to you, beholding the depths; in the high vault of heaven, glory to you.\n\
Glory to you, Father, Son, and Holy Spirit; we will praise you and highly exalt you for ever.";

const BENEDICTUS: &str = "Blessed be the Lord, the God of Israel; he has come to his people and set them free.\n\
He has raised up for us a mighty savior, born of the house of his servant David.\n\
Through his holy prophets he promised of old that he would save us from our enemies, from the hands of all who hate us.\n\
He promised to show mercy to our fathers and to remember his holy covenant.\n\
This was the oath he swore to our father Abraham, to set us free from the hands of our enemies,\n\
free to worship him without fear, holy and righteous in his sight all the days of our life.\n\
And you, child, shall be called the prophet of the Most High, for you will go before the Lord to prepare his way,\n\
to give his people knowledge of salvation by the forgiveness of their sins.\n\
In the tender compassion of our God the dawn from on high shall break upon us,\n\
to shine on those who dwell in darkness and the shadow of death, and to guide our feet into the way of peace.";

const MAGNIFICAT: &str = "My soul magnifies the Lord, and my spirit rejoices in God my Savior;\n\
for he has regarded the lowliness of his handmaiden.\n\
For behold, from this day forth all generations shall call me blessed;\n\
for he that is mighty has magnified me, and holy is his Name.\n\
And his mercy is on those who fear him, throughout all generations.\n\
He has shown strength with his arm; he has scattered the proud in the imagination of their hearts.\n\
He has brought down the mighty from their thrones and has exalted the humble and meek.\n\
He has filled the hungry with good things, and the rich he has sent empty away.\n\
He, remembering his mercy, has helped his servant Israel,\n\
as he promised to our forefathers, Abraham and his seed for ever.";

const NUNC_DIMITTIS: &str = "Lord, now you let your servant depart in peace, according to your word;\n\
for my eyes have seen your salvation,\n\
which you have prepared before the face of all people;\n\
to be a light to lighten the Gentiles, and to be the glory of your people Israel.";

pub const PHOS_HILARON: &str = "O gracious Light, pure brightness of the everliving Father in heaven,\n\
O Jesus Christ, holy and blessed!\n\
Now as we come to the setting of the sun, and our eyes behold the vesper light,\n\
we sing your praises, O God: Father, Son, and Holy Spirit.\n\
You are worthy at all times to be praised by happy voices,\n\
O Son of God, O Giver of Life, and to be glorified through all the worlds.";

pub const CONFESSION: &str = "Almighty and most merciful Father, we have erred and strayed from your ways like lost sheep.\n\
We have followed too much the deceits and desires of our own hearts.\n\
We have offended against your holy laws.\n\
We have left undone those things which we ought to have done, and we have done those things which we ought not to have done;\n\
and apart from your grace, there is no health in us.\n\
O Lord, have mercy upon us.\n\
Spare those who confess their faults.\n\
Restore those who are penitent, according to your promises declared to mankind in Christ Jesus our Lord.\n\
And grant, O most merciful Father, for his sake, that we may now live a godly, righteous, and sober life,\n\
to the glory of your holy Name. Amen.";

pub const EXHORTATION: &str = "Dearly beloved, the Scriptures teach us to acknowledge our many sins and offenses, \
not concealing them from our heavenly Father, but confessing them with humble and obedient hearts \
that we may obtain forgiveness by his infinite goodness and mercy. \
Let us therefore draw near with humble hearts to the throne of heavenly grace.";

pub const APOSTLES_CREED: &str = "I believe in God, the Father almighty, creator of heaven and earth.\n\
I believe in Jesus Christ, his only Son, our Lord.\n\
He was conceived by the Holy Spirit and born of the Virgin Mary.\n\
He suffered under Pontius Pilate, was crucified, died, and was buried.\n\
He descended to the dead.\n\
On the third day he rose again.\n\
He ascended into heaven, and is seated at the right hand of the Father.\n\
He will come again to judge the living and the dead.\n\
I believe in the Holy Spirit, the holy catholic Church, the communion of saints,\n\
the forgiveness of sins, the resurrection of the body, and the life everlasting. Amen.";

pub const LORDS_PRAYER: &str = "Our Father, who art in heaven, hallowed be thy Name,\n\
thy kingdom come, thy will be done, on earth as it is in heaven.\n\
Give us this day our daily bread.\n\
And forgive us our trespasses, as we forgive those who trespass against us.\n\
And lead us not into temptation, but deliver us from evil.\n\
For thine is the kingdom, and the power, and the glory, for ever and ever. Amen.";

pub const GENERAL_THANKSGIVING: &str = "Almighty God, Father of all mercies, we your unworthy servants give you humble thanks \
for all your goodness and loving-kindness to us and to all whom you have made. \
We bless you for our creation, preservation, and all the blessings of this life; \
but above all for your immeasurable love in the redemption of the world by our Lord Jesus Christ; \
for the means of grace, and for the hope of glory. And, we pray, give us such an awareness of your mercies, \
that with truly thankful hearts we may show forth your praise, not only with our lips, but in our lives, \
by giving up our selves to your service, and by walking before you in holiness and righteousness all our days; \
through Jesus Christ our Lord, to whom, with you and the Holy Spirit, be honor and glory throughout all ages. Amen.";

pub const CHRYSOSTOM: &str = "Almighty God, you have given us grace at this time with one accord to make our common supplication to you; \
and you have promised through your well-beloved Son that when two or three are gathered together in his name \
you will be in the midst of them: Fulfill now, O Lord, our desires and petitions as may be best for us; \
granting us in this world knowledge of your truth, and in the age to come life everlasting. Amen.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venite_lenten_form() {
        let ordinary = CanticleId::Venite.text(false);
        let lenten = CanticleId::Venite.text(true);
        assert!(lenten.contains("harden not your hearts"));
        assert!(!ordinary.contains("harden not your hearts"));
        assert!(ordinary.ends_with("world without end. Amen."));
        assert_eq!(CanticleId::Venite.citation(true), "PSALM 95");
        assert_eq!(CanticleId::Venite.citation(false), "PSALM 95:1-7, 8-11");
    }

    #[test]
    fn test_te_deum_has_no_citation() {
        assert!(CanticleId::TeDeum.citation(false).is_empty());
        assert!(!CanticleId::TeDeum.text(false).contains("Glory be to the Father"));
    }
}
